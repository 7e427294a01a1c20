//! Navigation seam
//!
//! The sidebar only records which path is highlighted. Whatever performs the
//! actual page transition implements [`Navigator`] and is handed every path
//! the user selects.

/// Receives route selections from the sidebar
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

/// Default navigator: logs each transition from the current path
#[derive(Debug, Default)]
pub struct TracingNavigator {
    current: Option<String>,
}

impl TracingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last path navigated to
    #[cfg(test)]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

impl Navigator for TracingNavigator {
    fn navigate(&mut self, path: &str) {
        let from = self.current.as_deref().unwrap_or("-");
        match super::routes::find(path) {
            Some(route) => tracing::info!("Navigate {} -> {} ({})", from, path, route.title),
            None => tracing::warn!("Navigate {} -> unknown path {}", from, path),
        }
        self.current = Some(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_current_path() {
        let mut nav = TracingNavigator::new();
        assert_eq!(nav.current(), None);
        nav.navigate("/sales");
        nav.navigate("/support");
        assert_eq!(nav.current(), Some("/support"));
        nav.navigate("/nowhere");
        assert_eq!(nav.current(), Some("/nowhere"));
    }
}
