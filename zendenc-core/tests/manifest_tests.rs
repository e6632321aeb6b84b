// zendenc-core/tests/manifest_tests.rs

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use zendenc_core::config::{SigningMode, SourceDisposition};
use zendenc_core::error::CoreError;
use zendenc_core::manifest::EncodeJob;

fn write_manifest(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("encode.toml");
    fs::write(&path, content).expect("Failed to write manifest");
    path
}

#[test]
fn test_full_manifest() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = write_manifest(
        dir.path(),
        r#"
[options]
encoder = "/opt/zend/bin/zendenc"
rename_source_ext = "bak"
short_tags = false
asp_tags = true
use_crypto = true
expires = "2027-06-30"
obfuscation_level = 2
optimizations = 0
sign_product = "MyApp"
private_key = "/etc/keys/private.pem"

[[fileset]]
name = "sources"
dir = "src"
include = ["**/*.php"]
exclude = ["vendor/**"]

[[fileset]]
dir = "/srv/extra"
"#,
    );

    let job = EncodeJob::load(&path)?;
    let (options, selections) = job.into_parts(dir.path())?;

    assert_eq!(options.encoder_path, PathBuf::from("/opt/zend/bin/zendenc"));
    assert_eq!(
        options.source_disposition,
        SourceDisposition::Rename("bak".to_string())
    );
    assert!(!options.short_tags);
    assert!(options.asp_tags);
    assert!(options.use_crypto);
    assert_eq!(
        options.expires,
        Some(NaiveDate::from_ymd_opt(2027, 6, 30).unwrap())
    );
    assert_eq!(options.obfuscation_level, 2);
    assert_eq!(options.optimization_mask, Some(0));
    assert_eq!(
        options.signing,
        SigningMode::Sign {
            product: "MyApp".to_string(),
            private_key: PathBuf::from("/etc/keys/private.pem"),
        }
    );

    assert_eq!(selections.len(), 2);
    assert_eq!(selections[0].name(), "sources");
    // Relative fileset dirs resolve against the manifest's directory.
    assert_eq!(selections[0].base_dir(), dir.path().join("src"));
    assert_eq!(selections[1].name(), "fileset-2");
    assert_eq!(selections[1].base_dir(), Path::new("/srv/extra"));
    Ok(())
}

#[test]
fn test_minimal_manifest_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = write_manifest(
        dir.path(),
        r#"
[options]
encoder = "/opt/zend/bin/zendenc"

[[fileset]]
dir = "src"
"#,
    );

    let (options, selections) = EncodeJob::load(&path)?.into_parts(dir.path())?;

    assert_eq!(options.source_disposition, SourceDisposition::Delete);
    assert!(options.short_tags);
    assert!(!options.asp_tags);
    assert!(!options.no_header);
    assert_eq!(options.obfuscation_level, 0);
    assert_eq!(options.optimization_mask, None);
    assert_eq!(options.signing, SigningMode::None);
    assert_eq!(selections.len(), 1);
    Ok(())
}

#[test]
fn test_sign_and_license_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = write_manifest(
        dir.path(),
        r#"
[options]
encoder = "/opt/zend/bin/zendenc"
sign_product = "MyApp"
license_product = "MyApp"
private_key = "/etc/keys/private.pem"
"#,
    );

    match EncodeJob::load(&path)?.into_parts(dir.path()) {
        Err(CoreError::Config(msg)) => {
            assert!(msg.contains("mutually exclusive"));
        }
        other => panic!("Unexpected result: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_invalid_expires_date() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = write_manifest(
        dir.path(),
        r#"
[options]
encoder = "/opt/zend/bin/zendenc"
expires = "31/01/2027"
"#,
    );

    match EncodeJob::load(&path)?.into_parts(dir.path()) {
        Err(CoreError::Config(msg)) => {
            assert!(msg.contains("invalid expires date"));
        }
        other => panic!("Unexpected result: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_unknown_key_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = write_manifest(
        dir.path(),
        r#"
[options]
encoder = "/opt/zend/bin/zendenc"
delete_source = true
"#,
    );

    match EncodeJob::load(&path) {
        Err(CoreError::Config(msg)) => {
            assert!(msg.contains("invalid job manifest"));
        }
        other => panic!("Unexpected result: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_missing_manifest_file() {
    let result = EncodeJob::load(Path::new("/nonexistent/encode.toml"));
    match result {
        Err(CoreError::Config(msg)) => {
            assert!(msg.contains("cannot read job manifest"));
        }
        other => panic!("Unexpected result: {:?}", other),
    }
}
