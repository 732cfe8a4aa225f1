use std::error::Error;
use slck::errors::SlckError;

#[test]
fn test_slck_error_implements_error_trait() {
    fn assert_error<T: Error + Send + Sync + 'static>(_: &T) {}

    let error = SlckError::Parse("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_slck_error_display() {
    let error = SlckError::Api("invalid_auth".to_string());
    assert_eq!(format!("{error}"), "Failed to access Slack API: invalid_auth");

    let error = SlckError::NotFound("name=fake-channel".to_string());
    assert_eq!(format!("{error}"), "Channel not found: name=fake-channel");

    let error = SlckError::InvalidArgument("one of channel_name or channel_id is required".to_string());
    assert_eq!(
        format!("{error}"),
        "Invalid argument: one of channel_name or channel_id is required"
    );

    let error = SlckError::Http("Connection error".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: Connection error"
    );
}

#[test]
fn test_slck_error_from_serde_json() {
    let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let slck_err: SlckError = err.into();

    assert!(matches!(slck_err, SlckError::Parse(_)));
}

#[test]
fn test_slck_error_from_conversions() {
    // reqwest::Error and SlackClientError cannot be built directly; this only has to compile.
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> SlckError {
        SlckError::from(err)
    }

    #[allow(unused)]
    fn _check_slack_client_conversion(
        err: slack_morphism::errors::SlackClientError,
    ) -> SlckError {
        SlckError::from(err)
    }
}
