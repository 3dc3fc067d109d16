//! End-to-end checks against hand-calculated worked examples, driven through
//! the JSON entry point the way a client would use the engine.

use approx::assert_relative_eq;
use capacity_core::elements::masonry_wall::{HorizontalShearParams, RefinedCompressionParams};
use capacity_core::elements::reinforced_masonry_wall::ReinforcementParams;
use capacity_core::elements::timber_column::CompressionParams;
use capacity_core::elements::{BendingParams, Element, ElementInput};
use capacity_core::factors::masonry::ShearInterface;
use capacity_core::factors::timber::{LateralRestraint, LoadDuration, RestraintEdge, StrengthSharing};
use capacity_core::{CalcError, DesignCapacity};

const F17_BEAM: &str = r#"{
    "type": "TimberBeam",
    "label": "B-1",
    "category": "F-grade",
    "grade": "F17",
    "condition": { "seasoning": "Seasoned", "latitude": "Temperate" },
    "moisture_content_pct": 12.0,
    "application": "Category1",
    "length_mm": 3000.0,
    "depth_mm": 200.0,
    "breadth_mm": 50.0
}"#;

const F17_POST: &str = r#"{
    "type": "TimberColumn",
    "label": "P-1",
    "category": "F-grade",
    "grade": "F17",
    "condition": { "seasoning": "Seasoned", "latitude": "Temperate" },
    "moisture_content_pct": 12.0,
    "application": "Category1",
    "length_mm": 2400.0,
    "depth_mm": 90.0,
    "breadth_mm": 90.0,
    "end_restraint": "PinnedBothEnds"
}"#;

fn clay_wall(label: &str, length_mm: f64, mortar: &str) -> String {
    format!(
        r#"{{
            "type": "MasonryWall",
            "label": "{label}",
            "length_mm": {length_mm},
            "height_mm": 2700.0,
            "thickness_mm": 110.0,
            "material": {{
                "unit": "clay", "mortar": "{mortar}", "bedding": "full", "fuc_mpa": 20.0,
                "unit_height_mm": 76.0, "unit_length_mm": 230.0, "joint_thickness_mm": 10.0,
                "fmt_mpa": 0.2, "fut_mpa": 0.8, "density_kn_m3": 19.0
            }}
        }}"#
    )
}

fn build(json: &str) -> Element {
    ElementInput::from_json(json).unwrap().build().unwrap()
}

fn bending(restraint_spacing_mm: f64) -> BendingParams {
    BendingParams {
        load_duration: LoadDuration::FiveSeconds,
        strength_sharing: StrengthSharing::Single,
        restraint: LateralRestraint::new(RestraintEdge::CompressionEdge, restraint_spacing_mm),
        rho_b: 0.9,
    }
}

#[test]
fn f17_beam_bending_matches_hand_value() {
    let Element::TimberBeam(beam) = build(F17_BEAM) else {
        panic!("expected a timber beam");
    };
    let md = beam.major_axis_bending(&bending(300.0)).unwrap();
    assert_relative_eq!(md.capacity_knm, 12.6, max_relative = 0.005);

    let unrestrained = beam.major_axis_bending(&bending(3000.0)).unwrap();
    assert_relative_eq!(unrestrained.capacity_knm, 7.920, max_relative = 1e-3);

    let vd = beam.shear(LoadDuration::FiveSeconds).unwrap();
    assert_relative_eq!(vd.capacity_kn, 21.6, max_relative = 1e-9);
}

#[test]
fn f17_post_compression() {
    let Element::TimberColumn(column) = build(F17_POST) else {
        panic!("expected a timber column");
    };
    let params = CompressionParams {
        load_duration: LoadDuration::FiveSeconds,
        rho_c: 1.0,
        major_restraint_spacing_mm: 2400.0,
        minor_restraint_spacing_mm: 2400.0,
    };
    let ndc = column.compression(&params).unwrap();
    assert_relative_eq!(ndc.capacity_kn, 69.710625, max_relative = 1e-9);
    assert!(ndc.passes(60.0));
}

#[test]
fn refined_compression_worked_example() {
    let Element::MasonryWall(wall) = build(&clay_wall("W-1", 600.0, "M4")) else {
        panic!("expected a masonry wall");
    };
    let t = 110.0;
    let result = wall
        .refined_compression(&RefinedCompressionParams {
            av: 0.75,
            ah: 0.0,
            kt: 1.0,
            e1_mm: t / 6.0,
            e2_mm: t / 6.0,
            dist_to_return_mm: None,
            effective_length_mm: None,
        })
        .unwrap();
    assert_relative_eq!(result.crushing_kn, 296.72, epsilon = 1e-9);
    assert_relative_eq!(result.buckling_kn, 150.57, epsilon = 1e-9);
}

#[test]
fn horizontal_shear_worked_example() {
    let Element::MasonryWall(wall) = build(&clay_wall("W-2", 4000.0, "M3")) else {
        panic!("expected a masonry wall");
    };
    let result = wall
        .horizontal_plane_shear(&HorizontalShearParams {
            kv: 0.3,
            fd_mpa: 0.41,
            interface: ShearInterface::Mortar,
        })
        .unwrap();
    assert_relative_eq!(result.bond_kn, 66.0, epsilon = 1e-9);
    assert_relative_eq!(result.friction_kn, 54.12, epsilon = 1e-9);
}

#[test]
fn invalid_mortar_fails_at_construction() {
    let input = ElementInput::from_json(&clay_wall("W-3", 1000.0, "M1")).unwrap();
    let err = input.build().unwrap_err();
    assert!(matches!(err, CalcError::MaterialNotFound { .. }));
    assert!(err.is_configuration_error());
    assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
}

#[test]
fn unknown_mortar_string_is_configuration_error() {
    let input = ElementInput::from_json(&clay_wall("W-7", 1000.0, "M9")).unwrap();
    let err = input.build().unwrap_err();
    assert!(matches!(err, CalcError::MaterialNotFound { .. }));
    assert!(err.is_configuration_error());
}

#[test]
fn lowercase_mortar_string_resolves() {
    let Element::MasonryWall(wall) = build(&clay_wall("W-8", 4000.0, "m3")) else {
        panic!("expected a masonry wall");
    };
    assert_eq!(wall.properties().km, 1.4);
}

#[test]
fn unknown_grade_string_is_configuration_error() {
    let json = F17_BEAM.replace("\"F17\"", "\"F99\"");
    let err = ElementInput::from_json(&json).unwrap().build().unwrap_err();
    assert!(matches!(err, CalcError::MaterialNotFound { .. }));
    assert!(err.is_configuration_error());
    assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
}

#[test]
fn lowercase_grade_string_resolves() {
    let json = F17_BEAM.replace("\"F17\"", "\"f17\"");
    let Element::TimberBeam(beam) = build(&json) else {
        panic!("expected a timber beam");
    };
    let md = beam.major_axis_bending(&bending(300.0)).unwrap();
    assert_relative_eq!(md.capacity_knm, 12.6, max_relative = 1e-9);
}

#[test]
fn reinforced_block_wall_bending_worked_example() {
    let json = r#"{
        "type": "ReinforcedMasonryWall",
        "label": "RW-1",
        "length_mm": 1000.0,
        "height_mm": 6000.0,
        "thickness_mm": 190.0,
        "material": {
            "unit": "hollow_concrete", "mortar": "M3", "bedding": "face_shell", "fuc_mpa": 15.0,
            "unit_height_mm": 200.0, "unit_length_mm": 400.0, "joint_thickness_mm": 10.0,
            "fmt_mpa": 0.2, "fut_mpa": 0.8, "density_kn_m3": 19.0
        }
    }"#;
    let Element::ReinforcedMasonryWall(wall) = build(json) else {
        panic!("expected a reinforced masonry wall");
    };
    let md = wall
        .out_of_plane_vertical_bending(&ReinforcementParams {
            effective_depth_mm: 95.0,
            tension_steel_area_mm2: 113.0 / 0.4,
            fsy_mpa: 500.0,
        })
        .unwrap();
    assert_eq!(md.capacity_knm, 9.21);
    assert!(md.passes(9.0));
}

#[test]
fn invalid_grade_for_category_fails_at_construction() {
    let json = F17_BEAM.replace("\"F-grade\"", "\"MGP\"");
    let err = ElementInput::from_json(&json).unwrap().build().unwrap_err();
    assert!(err.is_configuration_error());
}

#[test]
fn identical_inputs_give_identical_results() {
    let first = build(&clay_wall("W-4", 2000.0, "M3"));
    let second = build(&clay_wall("W-4", 2000.0, "M3"));
    let (Element::MasonryWall(a), Element::MasonryWall(b)) = (first, second) else {
        panic!("expected masonry walls");
    };
    assert_eq!(a.vertical_bending(0.1).unwrap(), b.vertical_bending(0.1).unwrap());
    assert_eq!(a.horizontal_bending(0.1).unwrap(), b.horizontal_bending(0.1).unwrap());
    assert_eq!(a.vertical_plane_shear().unwrap(), b.vertical_plane_shear().unwrap());
    assert_eq!(a.self_weight().unwrap(), b.self_weight().unwrap());
}

#[test]
fn masonry_capacities_are_non_negative() {
    let Element::MasonryWall(wall) = build(&clay_wall("W-5", 1500.0, "M3")) else {
        panic!("expected a masonry wall");
    };
    for fd in [0.0, 0.05, 0.2, 0.36, 1.0] {
        let vertical = wall.vertical_bending(fd).unwrap();
        let horizontal = wall.horizontal_bending(fd).unwrap();
        let shear = wall
            .horizontal_plane_shear(&HorizontalShearParams {
                kv: 0.3,
                fd_mpa: fd,
                interface: ShearInterface::DampProofCourse,
            })
            .unwrap();
        for value in [vertical.capacity_knm, horizontal.capacity_knm, shear.capacity_kn] {
            assert!(value.is_finite() && value >= 0.0);
        }
    }
}

#[test]
fn errors_serialize_with_tag() {
    let err = ElementInput::from_json(&clay_wall("W-6", -1.0, "M3"))
        .unwrap()
        .build()
        .unwrap_err();
    let json = serde_json::to_string(&err).unwrap();
    assert!(json.contains("\"type\":\"InvalidInput\""));
    assert!(json.contains("length_mm"));
}
