#![no_std]

use lockstep::prelude::*;
use lockstep::{empty, plain, wrap, Error};

// These tests ensure that the traits provided by `lockstep` work in a no std environment.

#[test]
fn zip() {
    let mut z = [plain([1, 2]), plain([3, 4])].zip().unwrap();
    assert_eq!(z.resume(None), Ok([1, 3]));
    assert_eq!(z.resume(None), Ok([2, 4]));
    assert_eq!(z.resume(None), Err(Error::Exhausted));
}

#[test]
fn combine() {
    let mut c = [plain("ab".chars()), plain("xy".chars())]
        .combine(|[a, b]: [char; 2]| a < b)
        .unwrap();
    assert_eq!(c.resume(None), Ok(true));
    assert_eq!(c.resume(None), Ok(true));
    assert!(c.resume(None).unwrap_err().is_exhausted());
}

#[test]
fn adapter() {
    let mut a = wrap(empty::<(), u8, &str>()).unwrap();
    assert_eq!(a.raise("boom"), Err(Error::Raised("boom")));
    assert_eq!(a.close(), Ok(()));
}
