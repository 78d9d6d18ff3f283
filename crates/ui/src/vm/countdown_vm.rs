use campus_core::model::CountdownSnapshot;

/// Circumference of the progress ring drawn by the overlay (r = 28).
pub const RING_CIRCUMFERENCE: f64 = 2.0 * std::f64::consts::PI * 28.0;

#[derive(Clone, Debug, PartialEq)]
pub struct CountdownVm {
    pub remaining_secs: u32,
    pub remaining_label: String,
    pub progress_percent: f64,
    /// `stroke-dashoffset` for the ring; shrinks to zero as the countdown completes.
    pub ring_offset: String,
}

impl From<CountdownSnapshot> for CountdownVm {
    fn from(snapshot: CountdownSnapshot) -> Self {
        let progress = snapshot.progress_percent.clamp(0.0, 100.0);
        let offset = RING_CIRCUMFERENCE * (1.0 - progress / 100.0);
        Self {
            remaining_secs: snapshot.remaining_secs,
            remaining_label: match snapshot.remaining_secs {
                1 => "Next lesson in 1 second".to_string(),
                secs => format!("Next lesson in {secs} seconds"),
            },
            progress_percent: progress,
            ring_offset: format!("{offset:.2}"),
        }
    }
}
