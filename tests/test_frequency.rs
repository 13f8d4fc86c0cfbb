//! Cycle-to-duration conversion properties.

use core::time::Duration;
use upcycle::Frequency;

#[test]
fn test_one_million_cycles_at_one_megahertz_is_one_second() {
    let freq = Frequency::hz(1_000_000);

    let dur = freq.duration_from_cycles(1_000_000);
    assert_eq!(dur, Duration::from_secs(1));
    assert_eq!(dur.as_nanos(), 1_000_000_000);
}

#[test]
fn test_conversion_is_exact_across_second_boundaries() {
    let test_cases = [
        // (hz, cycles, expected)
        (1_000, 500, Duration::from_millis(500)),
        (1_000, 1_500, Duration::from_millis(1_500)),
        (32_768, 32_768, Duration::from_secs(1)),
        (8_000_000, 4_000_000, Duration::from_millis(500)),
        (1, 86_400, Duration::from_secs(86_400)),
    ];

    for (hz, cycles, expected) in test_cases {
        let dur = Frequency::hz(hz).duration_from_cycles(cycles);
        assert_eq!(
            dur, expected,
            "{} cycles at {} Hz should be {:?}",
            cycles, hz, expected
        );
    }
}

#[test]
fn test_sub_nanosecond_fractions_truncate() {
    // 3 Hz: one cycle is 333333333.3... ns
    let freq = Frequency::hz(3);

    assert_eq!(freq.duration_from_cycles(1), Duration::from_nanos(333_333_333));
    assert_eq!(freq.duration_from_cycles(3), Duration::from_secs(1));
}

#[test]
fn test_wide_cycle_counts_do_not_overflow() {
    // More cycles than a 32-bit counter could ever hold: 2^32 wraps worth
    let freq = Frequency::mhz(100);
    let cycles = u64::MAX;

    let dur = freq.duration_from_cycles(cycles);
    assert_eq!(dur.as_secs(), cycles / 100_000_000);
}

#[test]
fn test_conversion_is_pure() {
    let freq = Frequency::khz(10);

    let first = freq.duration_from_cycles(12_345);
    let second = freq.duration_from_cycles(12_345);
    assert_eq!(first, second);
}
