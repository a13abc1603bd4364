use crate::model::WeatherDisplay;

/// What the presentation layer should currently show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryState {
    /// No search issued yet.
    #[default]
    Init,
    /// The latest search is in flight.
    Loading,
    Success {
        display: WeatherDisplay,
        recent_searches: Vec<String>,
    },
    Error {
        message: String,
        /// Result of the last successful search, if there was one.
        last_known: Option<WeatherDisplay>,
        recent_searches: Vec<String>,
    },
}

impl QueryState {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    /// The display worth rendering: the fresh one on success, the last known one on error.
    pub fn display(&self) -> Option<&WeatherDisplay> {
        match self {
            QueryState::Success { display, .. } => Some(display),
            QueryState::Error { last_known, .. } => last_known.as_ref(),
            QueryState::Init | QueryState::Loading => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            QueryState::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn recent_searches(&self) -> &[String] {
        match self {
            QueryState::Success { recent_searches, .. }
            | QueryState::Error { recent_searches, .. } => recent_searches,
            QueryState::Init | QueryState::Loading => &[],
        }
    }

    /// Drop the recent-search list carried by this state.
    ///
    /// Returns whether anything changed, so callers can skip notifying observers.
    pub(crate) fn clear_recent_searches(&mut self) -> bool {
        match self {
            QueryState::Success { recent_searches, .. }
            | QueryState::Error { recent_searches, .. }
                if !recent_searches.is_empty() =>
            {
                recent_searches.clear();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display() -> WeatherDisplay {
        WeatherDisplay {
            temperature: 29,
            feels_like: 32,
            min_temp: 21,
            max_temp: 35,
            icon_url: String::new(),
            location: None,
            condition: None,
            observed_at: None,
        }
    }

    #[test]
    fn clearing_success_keeps_display() {
        let mut state = QueryState::Success {
            display: display(),
            recent_searches: vec!["Dhaka".into(), "Chittagong".into()],
        };

        assert!(state.clear_recent_searches());
        assert!(state.recent_searches().is_empty());
        assert_eq!(state.display(), Some(&display()));

        assert!(!state.clear_recent_searches());
    }

    #[test]
    fn clearing_error_keeps_message_and_last_known() {
        let mut state = QueryState::Error {
            message: "boom".into(),
            last_known: Some(display()),
            recent_searches: vec!["Dhaka".into()],
        };

        assert!(state.clear_recent_searches());
        assert_eq!(state.error_message(), Some("boom"));
        assert_eq!(state.display(), Some(&display()));
        assert!(state.recent_searches().is_empty());
    }

    #[test]
    fn clearing_init_or_loading_is_noop() {
        let mut init = QueryState::Init;
        let mut loading = QueryState::Loading;

        assert!(!init.clear_recent_searches());
        assert!(!loading.clear_recent_searches());
        assert_eq!(init, QueryState::Init);
        assert_eq!(loading, QueryState::Loading);
    }
}
