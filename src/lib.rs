#![doc = r#"
HARMONY — a harmonic mean calculator, as a CLI and an embeddable library.

This crate computes `harmonic_mean(nums) = n / Σ(1/x_i)` for a finite,
non-empty collection of nonzero numbers. Two interchangeable reduction
strategies implement the same contract: a plain scalar loop and an
`ndarray`-backed vectorized kernel. The strategies exist as a
performance-comparison pair; pick one explicitly or take the default.

Add dependency
--------------
```toml
[dependencies]
harmony = "0.1"
```

Quick start
-----------
```rust
use harmony::{harmonic_mean, harmonic_mean_with, Strategy};

fn main() -> harmony::Result<()> {
    let mean = harmonic_mean(&[1.0, 2.0, 4.0])?;
    assert!((mean - 12.0 / 7.0).abs() < 1e-9);

    // Same contract, explicit kernel selection.
    let scalar = harmonic_mean_with(&[1.0, 2.0, 4.0], Strategy::Scalar)?;
    assert!((scalar - mean).abs() < 1e-9);
    Ok(())
}
```

Reports for machine-readable output
-----------------------------------
```rust
use harmony::{MeanParams, harmonic_mean_report};

fn main() -> harmony::Result<()> {
    let report = harmonic_mean_report(&[2.0, 2.0], &MeanParams::default())?;
    assert_eq!(report.count, 2);
    assert_eq!(report.mean, 2.0);
    Ok(())
}
```

Error handling
--------------
All public functions return `harmony::Result<T>`; match on `harmony::Error`
to handle specific cases. An empty input and a zero element are the only
failure modes, and neither is ever silently absorbed by the library:

```rust
use harmony::{Error, harmonic_mean};

match harmonic_mean(&[]) {
    Err(Error::EmptyInput) => {}
    other => panic!("unexpected: {other:?}"),
}
match harmonic_mean(&[4.0, 0.0]) {
    Err(Error::DivisionByZero { index }) => assert_eq!(index, 1),
    other => panic!("unexpected: {other:?}"),
}
```

The `harmony` binary, by contrast, deliberately suppresses both failure modes
and prints `0.0` (see README for why this fallback is flagged).

Useful modules
--------------
- [`api`] — high-level entry points (`harmonic_mean*`, `MeanReport`).
- [`types`] — the reduction [`Strategy`] enum.
- [`core`] — the low-level kernels and [`MeanParams`].
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
pub use core::params::MeanParams;
pub use error::{Error, Result};
pub use types::Strategy;

// High-level API re-exports
pub use api::{MeanReport, harmonic_mean, harmonic_mean_report, harmonic_mean_with};
