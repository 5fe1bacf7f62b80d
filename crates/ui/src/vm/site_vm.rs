use luxe_core::Clock;

#[must_use]
pub fn copyright_line(clock: &Clock) -> String {
    format!(
        "© {} Luxe Vision Event Coordinating. All rights reserved.",
        clock.year()
    )
}
