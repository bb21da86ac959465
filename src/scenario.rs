use sapx::{
    Adapter, Bar, BarRelease, Constraint6Dof, Diagnostic, Dof, DofType, LinearLinkProps,
    LinkConstraint, LinkPropType, Material, MemoryModel, Node, SapMaterialType, SapModel,
    UpdateOutcome,
};

/// Everything the demonstration session produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    /// Link constraints read back from the model.
    pub links: Vec<LinkConstraint>,
    /// Outcome of each material update, by material name.
    pub materials: Vec<(String, UpdateOutcome)>,
    /// Number of node supports written.
    pub supports_written: usize,
    /// Number of bar releases written.
    pub releases_written: usize,
    /// Notes and warnings recorded along the way.
    pub diagnostics: Vec<Diagnostic>,
}

/// Seed a small portal frame model: two columns, a beam, three link properties
/// and two materials.
pub fn build_demo_model() -> MemoryModel {
    let rigid = LinearLinkProps {
        dof: [true; 6],
        fixed: [true; 6],
        ..LinearLinkProps::default()
    };
    // A bearing with a shear spring; the spring has no domain counterpart.
    let bearing = LinearLinkProps {
        dof: [true; 6],
        fixed: [true, false, false, true, true, true],
        stiffness: [0.0, 5.0e5, 5.0e5, 0.0, 0.0, 0.0],
        ..LinearLinkProps::default()
    };

    MemoryModel::new()
        .with_link("Rigid", LinkPropType::Linear, rigid)
        .with_link("Bearing", LinkPropType::Linear, bearing)
        .with_link("Damper1", LinkPropType::Damper, LinearLinkProps::default())
        .with_material("S355", SapMaterialType::Steel)
        .with_material("C30/37", SapMaterialType::Concrete)
        .with_point("1")
        .with_point("2")
        .with_point("3")
        .with_point("4")
        .with_frame("Column1")
        .with_frame("Column2")
        .with_frame("Beam")
}

/// Run read, update and push operations against `adapter` and collect the results.
pub fn run_session<M: SapModel>(adapter: &mut Adapter<M>) -> SessionSummary {
    let links = adapter.read_link_constraints(None);

    // The third material is absent from the model and the second changes family.
    let mut materials = vec![
        Material::steel("S355"),
        Material::steel("C30/37"),
        Material::concrete("C40/50"),
    ];
    let outcomes = adapter.update_materials(&mut materials);
    let materials = materials
        .iter()
        .map(|material| material.description_or_name().to_string())
        .zip(outcomes)
        .collect();

    let mut nodes = vec![
        Node::new("1").with_support(Constraint6Dof::fixed("Fixed")),
        Node::new("2").with_support(Constraint6Dof::pinned("Pinned")),
        Node::new("3"),
        Node::new("4"),
    ];
    let supports_written = adapter.set_node_supports(&mut nodes);

    let pinned_end = Constraint6Dof::fixed("Pinned end")
        .with(Dof::RotationY, DofType::Free)
        .with(Dof::RotationZ, DofType::Free);
    // Releasing the beam's axial translation at both ends leaves it unrestrained.
    let sliding = Constraint6Dof::fixed("Sliding").with(Dof::TranslationX, DofType::Free);
    let mut bars = vec![
        Bar::new("Column1").with_release(BarRelease::fix_fix()),
        Bar::new("Column2").with_release(BarRelease::new(
            "FixPin",
            Constraint6Dof::fixed("Fixed"),
            pinned_end,
        )),
        Bar::new("Beam").with_release(BarRelease::new("Sliding", sliding.clone(), sliding)),
    ];
    let releases_written = adapter.set_bar_releases(&mut bars);

    SessionSummary {
        links,
        materials,
        supports_written,
        releases_written,
        diagnostics: adapter.diagnostics_mut().drain(),
    }
}
