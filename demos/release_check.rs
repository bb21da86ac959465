use sapx::{bar_release_to_sap, BarRelease, Constraint6Dof, Diagnostics, Dof, DofType};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut diagnostics = Diagnostics::new();

    let pinned = Constraint6Dof::fixed("Pin")
        .with(Dof::RotationY, DofType::Free)
        .with(Dof::RotationZ, DofType::Free);
    let beam = BarRelease::new("PinPin", pinned.clone(), pinned);
    let arrays = bar_release_to_sap(&beam, &mut diagnostics)?;
    println!("start release = {:?}", arrays.start_release);
    println!("end release   = {:?}", arrays.end_release);

    let sliding = Constraint6Dof::fixed("Slide").with(Dof::TranslationX, DofType::Free);
    let mechanism = BarRelease::new("Slide", sliding.clone(), sliding);
    if let Err(error) = bar_release_to_sap(&mechanism, &mut diagnostics) {
        println!("rejected: {error}");
    }

    for diagnostic in diagnostics.entries() {
        println!("{diagnostic}");
    }

    Ok(())
}
