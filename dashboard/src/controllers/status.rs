//! Status presentation mapping shared by the dashboard list and token cards.

use shared::TokenStatus;

/// Badge color for a deployment status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Green,
    Yellow,
    Red,
    Gray,
}

/// Badge icon for a deployment status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    Check,
    /// Animated while deployment is in progress
    Spinner,
    Alert,
    Clock,
}

pub fn status_color(status: TokenStatus) -> StatusColor {
    match status {
        TokenStatus::Deployed => StatusColor::Green,
        TokenStatus::Deploying => StatusColor::Yellow,
        TokenStatus::Failed => StatusColor::Red,
        TokenStatus::Pending | TokenStatus::Unknown => StatusColor::Gray,
    }
}

pub fn status_icon(status: TokenStatus) -> StatusIcon {
    match status {
        TokenStatus::Deployed => StatusIcon::Check,
        TokenStatus::Deploying => StatusIcon::Spinner,
        TokenStatus::Failed => StatusIcon::Alert,
        TokenStatus::Pending | TokenStatus::Unknown => StatusIcon::Clock,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_color_mapping_is_total() {
        assert_eq!(status_color(TokenStatus::Deployed), StatusColor::Green);
        assert_eq!(status_color(TokenStatus::Deploying), StatusColor::Yellow);
        assert_eq!(status_color(TokenStatus::Failed), StatusColor::Red);
        assert_eq!(status_color(TokenStatus::Pending), StatusColor::Gray);

        let other: TokenStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(status_color(other), StatusColor::Gray);
    }

    #[test]
    fn test_status_icon_mapping() {
        assert_eq!(status_icon(TokenStatus::Deployed), StatusIcon::Check);
        assert_eq!(status_icon(TokenStatus::Deploying), StatusIcon::Spinner);
        assert_eq!(status_icon(TokenStatus::Failed), StatusIcon::Alert);
        assert_eq!(status_icon(TokenStatus::Unknown), StatusIcon::Clock);
    }
}
