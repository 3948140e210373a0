use url::Url;

/// Latest status of the underlying transport.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectivityState {
    #[default]
    Stopped,
    Running {
        connected: bool,
        /// Only meaningful while `connected` is true.
        home_pages: Vec<String>,
    },
}

impl ConnectivityState {
    pub fn connected<I, S>(home_pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Running {
            connected: true,
            home_pages: home_pages.into_iter().map(Into::into).collect(),
        }
    }

    pub fn connecting() -> Self {
        Self::Running {
            connected: false,
            home_pages: Vec::new(),
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(
            self,
            Self::Running {
                connected: true,
                ..
            }
        )
    }

    /// Home pages advertised by a connected transport; empty otherwise.
    pub fn home_pages(&self) -> &[String] {
        match self {
            Self::Running {
                connected: true,
                home_pages,
            } => home_pages,
            _ => &[],
        }
    }

    /// First home page, if it is an absolute URL with a host.
    ///
    /// A malformed entry is treated the same as an empty list.
    pub fn first_home_page(&self) -> Option<&str> {
        let first = self.home_pages().first()?;
        match Url::parse(first) {
            Ok(parsed) if parsed.has_host() => Some(first.as_str()),
            _ => None,
        }
    }

    pub fn status_icon(&self) -> StatusIcon {
        match self {
            Self::Stopped => StatusIcon::Disconnected,
            Self::Running {
                connected: false, ..
            } => StatusIcon::Connecting,
            Self::Running {
                connected: true, ..
            } => StatusIcon::Connected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    Disconnected,
    Connecting,
    Connected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisiblePane {
    #[default]
    Status,
    Content,
}
