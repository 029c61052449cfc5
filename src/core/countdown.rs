// Countdown gate arithmetic.

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Time left until the target, broken into display units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Zero-padded `[days, hours, minutes, seconds]` as shown on the gate.
    pub fn labels(&self) -> [String; 4] {
        [
            pad2(self.days),
            pad2(self.hours),
            pad2(self.minutes),
            pad2(self.seconds),
        ]
    }
}

/// Remaining time from `now_ms` to `target_ms` (both epoch milliseconds), or
/// `None` once the target has passed.
pub fn remaining(target_ms: f64, now_ms: f64) -> Option<Remaining> {
    let distance = (target_ms - now_ms).floor() as i64;
    if distance < 0 {
        return None;
    }
    Some(Remaining {
        days: distance / MS_PER_DAY,
        hours: (distance % MS_PER_DAY) / MS_PER_HOUR,
        minutes: (distance % MS_PER_HOUR) / MS_PER_MINUTE,
        seconds: (distance % MS_PER_MINUTE) / MS_PER_SECOND,
    })
}

#[inline]
pub fn pad2(n: i64) -> String {
    format!("{:02}", n)
}
