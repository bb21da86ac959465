//! Bar end releases and the stability checks applied before they reach the engine.
//!
//! A degree of freedom is *fully released* at one end when it is not fixed and its
//! spring stiffness is exactly zero. Releasing the same degree of freedom fully at
//! both ends turns the bar into a mechanism, as do the two coupled bending cases
//! below, so those combinations are rejected instead of being sent to the engine.

use std::fmt;

use crate::diagnostics::Diagnostics;
use crate::dof::{to_engine_axis_order, Dof};
use crate::engine::FrameReleases;
use crate::errors::{BarEnd, ReleaseError};
use crate::model::BarRelease;

/// A combination of fully released degrees of freedom that leaves a bar unstable.
///
/// Rules are checked in the order of [`StabilityRule::ORDER`]; the first one that
/// fails is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StabilityRule {
    /// Translation X released at both ends; nothing carries axial load.
    TranslationX,
    /// Translation Z released at both ends.
    TranslationZ,
    /// Translation Y released at both ends.
    TranslationY,
    /// Rotation X released at both ends; the bar twists freely.
    RotationX,
    /// Rotation Z released at both ends while translation Y is released at either end.
    RotationZWithTranslationY,
    /// Rotation Y released at both ends while translation Z is released at either end.
    RotationYWithTranslationZ,
}

impl StabilityRule {
    /// Evaluation order.
    pub const ORDER: [StabilityRule; 6] = [
        StabilityRule::TranslationX,
        StabilityRule::TranslationZ,
        StabilityRule::TranslationY,
        StabilityRule::RotationX,
        StabilityRule::RotationZWithTranslationY,
        StabilityRule::RotationYWithTranslationZ,
    ];

    /// Check this rule against the fully released flags of both ends, given in
    /// domain order.
    #[must_use]
    pub fn is_violated(self, start: &[bool; 6], end: &[bool; 6]) -> bool {
        let both = |dof: Dof| start[dof.index()] && end[dof.index()];
        let either = |dof: Dof| start[dof.index()] || end[dof.index()];
        match self {
            StabilityRule::TranslationX => both(Dof::TranslationX),
            StabilityRule::TranslationZ => both(Dof::TranslationZ),
            StabilityRule::TranslationY => both(Dof::TranslationY),
            StabilityRule::RotationX => both(Dof::RotationX),
            StabilityRule::RotationZWithTranslationY => {
                both(Dof::RotationZ) && either(Dof::TranslationY)
            }
            StabilityRule::RotationYWithTranslationZ => {
                both(Dof::RotationY) && either(Dof::TranslationZ)
            }
        }
    }
}

impl fmt::Display for StabilityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StabilityRule::TranslationX => {
                f.write_str("can not release TranslationX for both ends")
            }
            StabilityRule::TranslationZ => {
                f.write_str("can not release TranslationZ for both ends")
            }
            StabilityRule::TranslationY => {
                f.write_str("can not release TranslationY for both ends")
            }
            StabilityRule::RotationX => f.write_str("can not release RotationX for both ends"),
            StabilityRule::RotationZWithTranslationY => f.write_str(
                "can not release TranslationY when RotationZ is released for both ends",
            ),
            StabilityRule::RotationYWithTranslationZ => f.write_str(
                "can not release TranslationZ when RotationY is released for both ends",
            ),
        }
    }
}

/// Per degree of freedom, `true` when it is released with zero stiffness.
#[must_use]
pub fn fully_released(released: &[bool; 6], spring: &[f64; 6]) -> [bool; 6] {
    let mut flags = [false; 6];
    for (flag, (&released, &spring)) in flags.iter_mut().zip(released.iter().zip(spring)) {
        *flag = released && spring == 0.0;
    }
    flags
}

/// Convert a bar release into the engine's release and spring arrays.
///
/// Output arrays are in engine order `[X, Z, Y, RX, RZ, RY]` and a `true` release
/// flag means the degree of freedom is not fixed.
///
/// # Errors
///
/// Returns [`ReleaseError::Missing`] and records a note when either end is not
/// configured; nothing is converted in that case. Returns
/// [`ReleaseError::Unstable`] and records a warning naming the violated rule when
/// the released degrees of freedom would leave the bar unstable.
///
/// # Examples
/// ```
/// use sapx::{bar_release_to_sap, BarRelease, Constraint6Dof, Diagnostics, Dof, DofType};
///
/// let mut diagnostics = Diagnostics::new();
/// let pinned_end = Constraint6Dof::fixed("Pin")
///     .with(Dof::RotationY, DofType::Free)
///     .with(Dof::RotationZ, DofType::Free);
/// let release = BarRelease::new("FixPin", Constraint6Dof::fixed("Fix"), pinned_end);
///
/// let arrays = bar_release_to_sap(&release, &mut diagnostics).expect("stable release");
/// assert_eq!(arrays.end_release, [false, false, false, false, true, true]);
/// assert!(diagnostics.is_empty());
/// ```
pub fn bar_release_to_sap(
    release: &BarRelease,
    diagnostics: &mut Diagnostics,
) -> Result<FrameReleases, ReleaseError> {
    let (Some(start), Some(end)) = (&release.start_release, &release.end_release) else {
        let missing = if release.start_release.is_none() {
            BarEnd::Start
        } else {
            BarEnd::End
        };
        let error = ReleaseError::Missing(missing);
        diagnostics.note(error.to_string());
        return Err(error);
    };

    let arrays = FrameReleases {
        start_release: to_engine_axis_order(start.released_flags()),
        start_spring: to_engine_axis_order(start.stiffness),
        end_release: to_engine_axis_order(end.released_flags()),
        end_spring: to_engine_axis_order(end.stiffness),
    };

    // Back to domain order so the rules can address degrees of freedom by name.
    let start_free = to_engine_axis_order(fully_released(
        &arrays.start_release,
        &arrays.start_spring,
    ));
    let end_free = to_engine_axis_order(fully_released(&arrays.end_release, &arrays.end_spring));

    match StabilityRule::ORDER
        .into_iter()
        .find(|rule| rule.is_violated(&start_free, &end_free))
    {
        Some(rule) => {
            let error = ReleaseError::Unstable {
                rule,
                arrays: Box::new(arrays),
            };
            diagnostics.warning(format!("{error} ({})", release.name));
            Err(error)
        }
        None => Ok(arrays),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;
    use crate::dof::{Constraint6Dof, DofType};

    fn release_only(dofs: &[Dof]) -> Constraint6Dof {
        dofs.iter()
            .fold(Constraint6Dof::fixed("Release"), |constraint, &dof| {
                constraint.with(dof, DofType::Free)
            })
    }

    #[test]
    fn spring_stiffness_prevents_full_release() {
        let flags = fully_released(
            &[true, true, false, true, false, false],
            &[0.0, 1.0e3, 0.0, 0.0, 0.0, 0.0],
        );
        assert_eq!(flags, [true, false, false, true, false, false]);
    }

    #[test]
    fn each_single_dof_rule_fires_on_its_own() {
        let cases = [
            (Dof::TranslationX, StabilityRule::TranslationX),
            (Dof::TranslationY, StabilityRule::TranslationY),
            (Dof::TranslationZ, StabilityRule::TranslationZ),
            (Dof::RotationX, StabilityRule::RotationX),
        ];
        for (dof, expected) in cases {
            let mut diagnostics = Diagnostics::new();
            let release = BarRelease::new("R", release_only(&[dof]), release_only(&[dof]));
            let error = bar_release_to_sap(&release, &mut diagnostics)
                .expect_err("double release is unstable");
            assert!(matches!(error, ReleaseError::Unstable { rule, .. } if rule == expected));
            assert_eq!(diagnostics.count(Severity::Warning), 1);
            assert!(diagnostics.contains(&expected.to_string()));
        }
    }

    #[test]
    fn bending_release_alone_is_stable() {
        let mut diagnostics = Diagnostics::new();
        let both = [Dof::RotationY, Dof::RotationZ];
        let release = BarRelease::new("PinPin", release_only(&both), release_only(&both));
        let arrays = bar_release_to_sap(&release, &mut diagnostics).expect("pinned bar is stable");
        assert_eq!(arrays.start_release, [false, false, false, false, true, true]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn rotation_y_couples_with_translation_z_at_either_end() {
        let mut diagnostics = Diagnostics::new();
        let release = BarRelease::new(
            "R",
            release_only(&[Dof::RotationY]),
            release_only(&[Dof::RotationY, Dof::TranslationZ]),
        );
        let error = bar_release_to_sap(&release, &mut diagnostics).expect_err("unstable");
        assert!(matches!(
            error,
            ReleaseError::Unstable {
                rule: StabilityRule::RotationYWithTranslationZ,
                ..
            }
        ));
    }

    #[test]
    fn first_failing_rule_is_reported() {
        let mut diagnostics = Diagnostics::new();
        let everything = Constraint6Dof::free("Free");
        let release = BarRelease::new("R", everything.clone(), everything);
        let error = bar_release_to_sap(&release, &mut diagnostics).expect_err("unstable");
        assert!(matches!(
            error,
            ReleaseError::Unstable {
                rule: StabilityRule::TranslationX,
                ..
            }
        ));
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn overlapping_failures_report_the_earliest_rule() {
        let cases: [(&[Dof], &[Dof], StabilityRule); 4] = [
            (
                &[Dof::TranslationY, Dof::TranslationZ],
                &[Dof::TranslationY, Dof::TranslationZ],
                StabilityRule::TranslationZ,
            ),
            (
                &[Dof::RotationZ, Dof::TranslationY],
                &[Dof::RotationZ, Dof::TranslationY],
                StabilityRule::TranslationY,
            ),
            (
                &[Dof::RotationX, Dof::RotationY, Dof::TranslationZ],
                &[Dof::RotationX, Dof::RotationY],
                StabilityRule::RotationX,
            ),
            (
                &[Dof::RotationZ, Dof::RotationY, Dof::TranslationY],
                &[Dof::RotationZ, Dof::RotationY, Dof::TranslationZ],
                StabilityRule::RotationZWithTranslationY,
            ),
        ];
        for (start, end, expected) in cases {
            let mut diagnostics = Diagnostics::new();
            let release = BarRelease::new("R", release_only(start), release_only(end));
            let error = bar_release_to_sap(&release, &mut diagnostics).expect_err("unstable");
            assert!(
                matches!(error, ReleaseError::Unstable { rule, .. } if rule == expected),
                "expected {expected:?}, got {error:?}"
            );
            assert_eq!(diagnostics.count(Severity::Warning), 1);
            assert!(diagnostics.contains(&expected.to_string()));
        }
    }

    #[test]
    fn unstable_error_keeps_populated_arrays() {
        let mut diagnostics = Diagnostics::new();
        let start = release_only(&[Dof::TranslationX]).with_stiffness(Dof::RotationY, 5.0);
        let release = BarRelease::new("R", start, release_only(&[Dof::TranslationX]));
        let Err(ReleaseError::Unstable { arrays, .. }) =
            bar_release_to_sap(&release, &mut diagnostics)
        else {
            panic!("expected an unstable release");
        };
        assert_eq!(arrays.start_release, [true, false, false, false, false, false]);
        assert_eq!(arrays.start_spring, [0.0, 0.0, 0.0, 0.0, 0.0, 5.0]);
    }
}
