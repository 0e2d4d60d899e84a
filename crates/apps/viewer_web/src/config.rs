use serde::{Deserialize, Serialize};
use tour::ViewerConfig;

/// User-visible strings. Defaults are the French texts of the tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiMessages {
    pub loading: String,
    pub entry_text_error: String,
    pub tour_data_error: String,
    pub sidepanel_fallback_title: String,
    pub sidepanel_fallback: String,
    pub sidepanel_error: String,
    pub info_error: String,
}

impl Default for UiMessages {
    fn default() -> Self {
        Self {
            loading: "Chargement…".to_string(),
            entry_text_error: "Erreur de chargement du texte.".to_string(),
            tour_data_error: "Erreur de chargement des données.".to_string(),
            sidepanel_fallback_title: "Information".to_string(),
            sidepanel_fallback: "Aucune information disponible pour cette scène.".to_string(),
            sidepanel_error: "Erreur de chargement du contenu.".to_string(),
            info_error: "Erreur de chargement.".to_string(),
        }
    }
}

/// Page configuration, optionally passed as JSON to `init`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub viewer: ViewerConfig,
    pub data_url: String,
    pub info_url: String,
    /// Scene fade-out before the image is swapped, ms.
    pub fade_ms: i32,
    /// Delay before measuring freshly inserted text for the scroll hint, ms.
    pub indicator_check_ms: i32,
    /// `EnvFilter` directive for the console logger.
    pub log: String,
    pub messages: UiMessages,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            viewer: ViewerConfig::default(),
            data_url: "hotspots.json".to_string(),
            info_url: "texts/infos.html".to_string(),
            fade_ms: 400,
            indicator_check_ms: 100,
            log: "info".to_string(),
            messages: UiMessages::default(),
        }
    }
}

impl WebConfig {
    /// Blank input means defaults.
    pub fn from_json(json: Option<&str>) -> Result<Self, serde_json::Error> {
        match json.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(text) => {
                let mut config: WebConfig = serde_json::from_str(text)?;
                config.viewer = config.viewer.sanitized();
                config.fade_ms = config.fade_ms.max(0);
                config.indicator_check_ms = config.indicator_check_ms.max(0);
                Ok(config)
            }
        }
    }
}
