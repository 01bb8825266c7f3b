use msgcell::Localizer;

/// English phrases; timestamps render as `H:MM` (UTC).
#[derive(Clone, Copy, Debug, Default)]
pub struct FakeLocalizer;

impl Localizer for FakeLocalizer {
    fn sender_sent(&self, author_name: &str) -> String {
        format!("{author_name} sent:")
    }

    fn local_user_sent(&self) -> String {
        "You sent:".to_string()
    }

    fn long_timestamp(&self, timestamp_millis: i64) -> String {
        let minutes = timestamp_millis.div_euclid(60_000);
        let hour = minutes.div_euclid(60).rem_euclid(24);
        let minute = minutes.rem_euclid(60);
        format!("{hour}:{minute:02}")
    }
}
