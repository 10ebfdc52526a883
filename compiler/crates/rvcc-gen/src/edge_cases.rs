//! Edge-case tests for `rvcc-gen`, exercising boundary behaviors and
//! invariants from spec.md §8 that the main scenario tests don't cover.
