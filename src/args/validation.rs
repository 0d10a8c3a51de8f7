use std::path::PathBuf;
use url::Url;

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || std::fs::metadata(&path).is_err() {
        return Err(format!("The page '{file}' is not readable."));
    }
    Ok(path)
}

/// # Errors
///
/// Will return `Err` if the value is not an absolute http or https url
pub fn check_base_url(value: &str) -> Result<String, String> {
    let url = Url::parse(value).map_err(|e| format!("'{value}' is not a url: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(value.to_string()),
        other => Err(format!("'{value}' uses unsupported scheme '{other}'.")),
    }
}
