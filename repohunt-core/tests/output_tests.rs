// Tests for JSON output writing

use repohunt_core::{ScrapeError, read_output, write_output};
use repohunt_scanner::{Extra, LanguageStats, ResultRecord};
use std::fs;
use tempfile::TempDir;

fn issue_records() -> Vec<ResultRecord> {
    [
        "https://github.com/RealmTeam/django-rest-framework-social-oauth2/issues/223",
        "https://github.com/jpadilla/django-rest-framework-jwt/issues/462",
        "https://github.com/Styria-Digital/django-rest-framework-jwt/issues/4",
        "https://github.com/SimpleJWT/django-rest-framework-simplejwt/issues/71",
        "https://github.com/lock8/django-rest-framework-jwt-refresh-token/pull/50",
    ]
    .iter()
    .map(|url| ResultRecord::new(url.to_string()))
    .collect()
}

fn enriched_records() -> Vec<ResultRecord> {
    vec![
        ResultRecord {
            url: "https://github.com/atuldjadhav/DropBox-Cloud-Storage".to_string(),
            extra: Some(Extra {
                owner: "atuldjadhav".to_string(),
                language_stats: [("CSS", 52.0), ("JavaScript", 47.2), ("HTML", 0.8)]
                    .into_iter()
                    .collect::<LanguageStats>(),
            }),
        },
        ResultRecord {
            url: "https://github.com/michealbalogun/Horizon-dashboard".to_string(),
            extra: Some(Extra {
                owner: "michealbalogun".to_string(),
                language_stats: [("Python", 100.0)].into_iter().collect::<LanguageStats>(),
            }),
        },
    ]
}

#[test]
fn test_write_output_url_only_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("output.json");
    let records = issue_records();

    write_output(&records, &path)?;
    assert_eq!(read_output(&path)?, records);

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    for entry in raw.as_array().unwrap() {
        let object = entry.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object.contains_key("url"));
    }

    Ok(())
}

#[test]
fn test_write_output_enriched_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("output.json");
    let records = enriched_records();

    write_output(&records, &path)?;
    let read_back = read_output(&path)?;

    assert_eq!(read_back, records);
    assert_eq!(
        read_back[0].extra.as_ref().unwrap().language_stats.labels(),
        vec!["CSS", "JavaScript", "HTML"]
    );

    Ok(())
}

#[test]
fn test_write_output_format() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("output.json");

    write_output(&enriched_records()[1..], &path)?;

    assert_eq!(
        fs::read_to_string(&path)?,
        r#"[{"url":"https://github.com/michealbalogun/Horizon-dashboard","extra":{"owner":"michealbalogun","language_stats":{"Python":100.0}}}]"#
    );

    Ok(())
}

#[test]
fn test_write_empty_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("output.json");

    write_output(&[], &path)?;
    assert_eq!(fs::read_to_string(&path)?, "[]");

    Ok(())
}

#[test]
fn test_write_output_into_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope").join("output.json");

    let err = write_output(&issue_records(), &path).unwrap_err();
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_read_output_rejects_invalid_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("output.json");
    fs::write(&path, r#"[{"url": "https://github.com/jpadilla/pyjwt/issues/408""#)?;

    let err = read_output(&path).unwrap_err();
    assert!(matches!(err, ScrapeError::Output(_)));
    assert_eq!(err.exit_code(), 1);

    Ok(())
}
