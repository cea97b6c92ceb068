//! Integration tests for level-sensitive latches.

use seqlogic::common::SimError;
use seqlogic::core::latch::*;

/// Tests the SR latch characteristic table.
#[test]
fn test_sr_latch_set_reset_hold() {
    let mut latch = SrLatch::new();
    assert_eq!(latch.state(), LatchState::Reset);

    latch.step(true, false).unwrap();
    assert!(latch.read());
    assert!(!latch.read_inverted());

    latch.step(false, false).unwrap();
    assert_eq!(latch.state(), LatchState::Set);

    latch.step(false, true).unwrap();
    assert!(!latch.read());

    latch.step(false, false).unwrap();
    assert_eq!(latch.state(), LatchState::Reset);
}

/// Tests that the forbidden input is rejected and the state is preserved.
#[test]
fn test_sr_latch_forbidden_input() {
    let mut latch = SrLatch::new();
    latch.step(true, false).unwrap();

    let result = latch.step(true, true);
    assert!(matches!(result, Err(SimError::InvalidState(_))));
    assert_eq!(latch.state(), LatchState::Set);

    latch.step(false, true).unwrap();
    assert!(latch.step(true, true).is_err());
    assert_eq!(latch.state(), LatchState::Reset);
}

/// Tests that a D latch is transparent while enabled and frozen otherwise.
#[test]
fn test_d_latch_transparency() {
    let mut latch = DLatch::new();

    latch.step(true, true);
    assert!(latch.read());
    latch.step(false, true);
    assert!(!latch.read());
    latch.step(true, true);

    latch.step(false, false);
    assert!(latch.read());
    latch.step(false, false);
    assert!(latch.read());
}
