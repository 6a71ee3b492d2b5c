use crate::errors::AppError;
use crate::models::Preferences;
use std::path::Path;
use tokio::fs;
use tracing::warn;

/// Reads the remembered selection. A missing file means nothing was chosen
/// yet; an unreadable one is logged and treated the same way.
pub async fn load_preferences(path: &Path) -> Preferences {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Preferences::default(),
        Err(err) => {
            warn!(path = %path.display(), "ignoring preferences file, read failed: {err}");
            return Preferences::default();
        }
    };

    serde_json::from_slice(&bytes).unwrap_or_else(|err| {
        warn!(path = %path.display(), "ignoring preferences file, not valid JSON: {err}");
        Preferences::default()
    })
}

pub async fn persist_selection(path: &Path, user: &str) -> Result<(), AppError> {
    let prefs = Preferences {
        selected_user: Some(user.to_string()),
    };
    let payload = serde_json::to_vec_pretty(&prefs).map_err(AppError::storage)?;
    fs::write(path, payload).await.map_err(AppError::storage)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("store_status_{}_{name}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn missing_file_has_no_selection() {
        let prefs = load_preferences(&temp_path("missing")).await;
        assert_eq!(prefs.selected_user, None);
    }

    #[tokio::test]
    async fn persisted_selection_is_restored() {
        let path = temp_path("restore");
        persist_selection(&path, "ana").await.unwrap();
        let prefs = load_preferences(&path).await;
        assert_eq!(prefs.selected_user.as_deref(), Some("ana"));
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn corrupt_file_has_no_selection() {
        let path = temp_path("corrupt");
        std::fs::write(&path, b"{not json").unwrap();
        let prefs = load_preferences(&path).await;
        assert_eq!(prefs.selected_user, None);
        let _ = std::fs::remove_file(&path);
    }
}
