use crate::loader::ResultsState;
use crate::models::{StatusResponse, StoreStatus};
use crate::selection::SelectionController;

/// Binds values to `{{NAME}}` slots of a static template. Text slots are
/// HTML-escaped, fragment slots are inserted as given. Substituted values are
/// never scanned for slots again.
pub struct Template<'a> {
    source: &'a str,
    slots: Vec<(&'static str, String)>,
}

impl<'a> Template<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            slots: Vec::new(),
        }
    }

    pub fn text(mut self, name: &'static str, value: impl AsRef<str>) -> Self {
        self.slots.push((name, escape_html(value.as_ref())));
        self
    }

    pub fn html(mut self, name: &'static str, fragment: impl Into<String>) -> Self {
        self.slots.push((name, fragment.into()));
        self
    }

    /// Unbound slots render as nothing.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.source.len());
        let mut rest = self.source;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };

            let name = &after[..end];
            if let Some((_, value)) = self.slots.iter().find(|(slot, _)| *slot == name) {
                out.push_str(value);
            }
            rest = &after[end + 2..];
        }

        out.push_str(rest);
        out
    }
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_loading() -> String {
    LOADING_HTML.to_string()
}

pub fn render_error(message: &str) -> String {
    Template::new(ERROR_HTML).text("MESSAGE", message).render()
}

pub fn render_status(status: &StatusResponse) -> String {
    let cache_status = if status.cached {
        format!("💾 Cached podaci ({})", status.last_update)
    } else {
        format!("🔄 Osvježeno ({})", status.last_update)
    };
    let stores: String = status.stores.iter().map(render_store).collect();

    Template::new(STATUS_HTML)
        .text("DAY", &status.day)
        .text("DATE", &status.date)
        .html("CACHE_CLASS", if status.cached { " cached" } else { "" })
        .text("CACHE_STATUS", cache_status)
        .text("OPEN", status.summary.open.to_string())
        .text("CLOSED", status.summary.closed.to_string())
        .html("STORES", stores)
        .render()
}

fn render_store(store: &StoreStatus) -> String {
    let (icon, class) = if store.open {
        ("✅", "open")
    } else {
        ("❌", "closed")
    };

    Template::new(STORE_HTML)
        .html("ICON", icon)
        .html("STATUS_CLASS", class)
        .text("CHAIN", &store.chain)
        .text("NAME", &store.name)
        .text("HOURS", &store.hours)
        .render()
}

pub fn render_results(state: &ResultsState) -> String {
    match state {
        ResultsState::Loading => render_loading(),
        ResultsState::Loaded(status) => render_status(status),
        ResultsState::Failed(message) => render_error(message),
    }
}

pub fn render_index(selection: &SelectionController, state: &ResultsState) -> String {
    let toggles: String = selection
        .buttons()
        .iter()
        .map(|button| {
            Template::new(TOGGLE_HTML)
                .html("ACTIVE", if button.active { " active" } else { "" })
                .text("USER", &button.user)
                .text("LABEL", &button.label)
                .render()
        })
        .collect();

    Template::new(INDEX_HTML)
        .html("TOGGLES", toggles)
        .html("RESULTS", render_results(state))
        .render()
}

const LOADING_HTML: &str =
    r#"<div class="loading"><div class="spinner"></div>Učitavam podatke...</div>"#;

const ERROR_HTML: &str =
    r#"<div class="error"><strong>⚠️ Greška:</strong><br>{{MESSAGE}}</div>"#;

const STATUS_HTML: &str = r#"<div class="date-banner">📅 {{DAY}}, {{DATE}}</div><div class="cache-info{{CACHE_CLASS}}">{{CACHE_STATUS}}</div><div class="summary"><div class="summary-card open"><div class="number">{{OPEN}}</div><div class="label">RADI</div></div><div class="summary-card closed"><div class="number">{{CLOSED}}</div><div class="label">ZATVORENO</div></div></div>{{STORES}}"#;

const STORE_HTML: &str = r#"<div class="store"><div class="store-icon">{{ICON}}</div><div class="store-info"><div class="store-chain">{{CHAIN}}</div><div class="store-name">{{NAME}}</div><span class="store-hours {{STATUS_CLASS}}">{{HOURS}}</span></div></div>"#;

const TOGGLE_HTML: &str = r#"<form method="post" action="/select"><button type="submit" class="toggle-btn{{ACTIVE}}" name="user" value="{{USER}}" data-user="{{USER}}">{{LABEL}}</button></form>"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="hr">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Radi li u nedjelju?</title>
  <style>
    * { margin: 0; padding: 0; box-sizing: border-box; }

    body {
      font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Arial, sans-serif;
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      min-height: 100vh;
      padding: 15px;
    }

    .container {
      max-width: 600px;
      margin: 0 auto;
      background: white;
      border-radius: 16px;
      padding: 20px;
      box-shadow: 0 10px 40px rgba(0, 0, 0, 0.2);
    }

    h1 { color: #333; font-size: 1.8em; margin-bottom: 5px; }

    .subtitle { color: #666; font-size: 0.9em; margin-bottom: 15px; }

    .toggles {
      display: flex;
      gap: 6px;
      padding: 6px;
      margin-bottom: 15px;
      background: #f0f0f5;
      border-radius: 999px;
    }

    .toggles form { flex: 1; }

    .toggle-btn {
      width: 100%;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.95em;
      font-weight: 600;
      color: #666;
      background: transparent;
      cursor: pointer;
    }

    .toggle-btn.active {
      background: white;
      color: #764ba2;
      box-shadow: 0 4px 12px rgba(118, 75, 162, 0.2);
    }

    .date-banner {
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      color: white;
      padding: 15px;
      border-radius: 10px;
      text-align: center;
      font-size: 1.1em;
      font-weight: bold;
      margin-bottom: 15px;
    }

    .cache-info { text-align: center; font-size: 0.8em; color: #999; margin-bottom: 15px; }
    .cache-info.cached { color: #4CAF50; }

    .summary { display: flex; gap: 10px; margin-bottom: 20px; }
    .summary-card { flex: 1; padding: 12px; border-radius: 8px; text-align: center; }
    .summary-card.open { background: #e8f5e9; color: #2e7d32; }
    .summary-card.closed { background: #ffebee; color: #c62828; }
    .summary-card .number { font-size: 2em; font-weight: bold; }
    .summary-card .label { font-size: 0.85em; margin-top: 5px; }

    .store {
      padding: 15px;
      border-bottom: 1px solid #f0f0f0;
      display: flex;
      align-items: center;
      gap: 12px;
    }

    .store:last-child { border-bottom: none; }
    .store-icon { font-size: 2em; min-width: 40px; text-align: center; }
    .store-info { flex: 1; }
    .store-chain { font-size: 0.75em; color: #999; text-transform: uppercase; letter-spacing: 0.5px; }
    .store-name { font-size: 1.1em; font-weight: 600; color: #333; margin: 2px 0; }

    .store-hours {
      font-size: 0.9em;
      padding: 4px 10px;
      border-radius: 12px;
      display: inline-block;
      margin-top: 4px;
      color: white;
    }

    .store-hours.open { background: #4CAF50; }
    .store-hours.closed { background: #f44336; }

    .loading { text-align: center; padding: 40px; color: #666; }

    .spinner {
      border: 3px solid #f3f3f3;
      border-top: 3px solid #667eea;
      border-radius: 50%;
      width: 40px;
      height: 40px;
      animation: spin 1s linear infinite;
      margin: 0 auto 15px;
    }

    @keyframes spin {
      from { transform: rotate(0deg); }
      to { transform: rotate(360deg); }
    }

    .error {
      background: #ffebee;
      color: #c62828;
      padding: 15px;
      border-radius: 8px;
      margin: 20px 0;
    }

    .refresh-btn {
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      color: white;
      border: none;
      padding: 12px 25px;
      border-radius: 20px;
      cursor: pointer;
      font-size: 1em;
      width: 100%;
      margin-top: 15px;
      font-weight: 600;
    }

    .refresh-btn:active { transform: scale(0.98); }

    .footer { text-align: center; margin-top: 20px; color: white; font-size: 0.85em; }
  </style>
</head>
<body>
  <div class="container">
    <h1>🛒 Radi li u nedjelju?</h1>
    <p class="subtitle">Moje trgovine u Zagrebu</p>

    <div class="toggles">{{TOGGLES}}</div>

    <div id="results">{{RESULTS}}</div>

    <form method="get" action="/">
      <button class="refresh-btn" type="submit">🔄 Osvježi podatke</button>
    </form>
  </div>

  <div class="footer">Podaci se cachiraju 6 sati</div>
</body>
</html>
"#;
