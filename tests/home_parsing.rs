//! Parsing of a complete home document.

use homexml::home::decoration::{ArrowStyle, DashStyle};
use homexml::home::environment::DrawingMode;
use homexml::home::furniture::DEFAULT_CUT_OUT_SHAPE;
use homexml::home::{CameraKind, Lens, Paint, PaperOrientation, SortableProperty, TextAlignment};
use homexml::xml::{self, HomeXmlOptions};
use homexml::{Home, Id};
use pretty_assertions::assert_eq;

const SAMPLE: &str = include_str!("../data/sample_home.xml");

fn sample() -> Home {
    xml::from_str(SAMPLE, &HomeXmlOptions::default()).expect("Failed to parse sample")
}

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "Expected {} to be approximately equal to {}",
        actual,
        expected
    );
}

#[test]
fn test_root_attributes() {
    let home = sample();
    assert_eq!(home.version, 7200);
    assert_eq!(home.name.as_deref(), Some("Sample flat"));
    assert_eq!(home.wall_height, Some(250.0));
    assert_eq!(home.furniture_sorted_property, Some(SortableProperty::Name));
    assert_eq!(home.active_camera, CameraKind::Top);
    assert_eq!(home.selected_level, Some(Id::new("level1")));
    assert_eq!(
        home.furniture_visible_properties,
        vec![SortableProperty::Name, SortableProperty::Width, SortableProperty::Price]
    );
    assert_eq!(
        home.properties["com.example.author"].as_text(),
        Some("Jane")
    );
    assert_eq!(
        home.properties["com.example.sketch"]
            .as_content()
            .map(|c| c.location()),
        Some("https://cdn.example.com/sketch.png")
    );
    assert_eq!(home.background_image.as_ref().unwrap().x_origin, 10.0);
}

#[test]
fn test_levels() {
    let home = sample();
    assert_eq!(home.levels.len(), 2);
    let first = home.level("level1").unwrap();
    assert_eq!(first.name.as_deref(), Some("First floor"));
    assert_eq!(first.elevation, 250.0);
    assert_eq!(first.height, 240.0);
    assert_eq!(first.elevation_index, 0);
    assert_eq!(first.properties["com.example.use"].as_text(), Some("bedrooms"));
    assert!(home.is_level_used("level0"));
}

#[test]
fn test_environment_and_camera_path() {
    let home = sample();
    let environment = &home.environment;
    assert_eq!(environment.ground, Some(Paint::Color(0xFF336633)));
    // The sky texture wins over the sky color
    let sky = environment.sky.as_ref().and_then(Paint::texture).unwrap();
    assert_eq!(sky.name.as_deref(), Some("Cloudy"));
    assert_eq!(environment.drawing_mode, DrawingMode::FillAndOutline);
    assert_eq!(environment.video_frame_rate, 30);
    let path: Vec<&str> = environment
        .video_camera_path
        .iter()
        .map(|camera| camera.id.as_str())
        .collect();
    assert_eq!(path, vec!["path0", "path1"]);
}

#[test]
fn test_cameras() {
    let home = sample();
    assert_eq!(home.top_camera.id, "top");
    assert_eq!(home.top_camera.kind, CameraKind::Top);
    assert_eq!(home.observer_camera.id, "observer");
    assert!(home.observer_camera.fixed_size);
    assert_eq!(home.stored_cameras.len(), 1);
    assert_eq!(home.stored_cameras[0].name.as_deref(), Some("Kitchen view"));
    assert_eq!(home.stored_cameras[0].lens, Lens::Spherical);
}

#[test]
fn test_print_and_compass() {
    let home = sample();
    let print = home.print.as_ref().unwrap();
    assert_eq!(print.paper_orientation, PaperOrientation::Landscape);
    assert_eq!(print.header_format.as_deref(), Some("$title"));
    assert_eq!(print.plan_scale, Some(0.01));
    assert_eq!(
        print.printed_levels,
        Some(vec![Id::new("level1"), Id::new("level0")])
    );

    assert_eq!(home.compass.north_direction, 45.0);
    assert_eq!(home.compass.time_zone.as_deref(), Some("Europe/Paris"));
}

#[test]
fn test_furniture_variants() {
    let home = sample();
    let table = home.piece("table").unwrap();
    assert_eq!(table.price.unwrap().to_string(), "129.90");
    assert_eq!(table.value_added_tax_percentage.unwrap().to_string(), "0.2");
    assert_eq!(table.model_size, Some(48213));
    assert!(table.model_centered_at_origin);
    assert_eq!(table.model_rotation.unwrap()[(1, 2)], 1.0);
    assert_eq!(table.paint, Some(Paint::Color(0xFF804020)));
    let materials = table.model_materials.as_ref().unwrap();
    assert_eq!(materials.len(), 2);
    assert_eq!(materials[0].shininess, Some(0.25));
    assert_eq!(
        materials[1].texture.as_ref().and_then(|t| t.name.as_deref()),
        Some("Brushed")
    );
    let transformations = table.model_transformations.as_ref().unwrap();
    assert_eq!(transformations[0].matrix[(2, 3)], 5.0);

    let door = home.piece("door").unwrap().as_door_or_window().unwrap();
    assert!(door.bound_to_wall);
    assert_eq!(door.sashes.len(), 1);
    assert_eq!(door.sashes[0].end_angle, -1.57);

    let window = home.piece("oldWindow").unwrap();
    assert_eq!(
        window.as_door_or_window().unwrap().cut_out_shape.as_deref(),
        Some(DEFAULT_CUT_OUT_SHAPE)
    );

    let lamp = home.piece("lamp").unwrap().as_light().unwrap();
    assert_eq!(lamp.power, 0.75);
    assert_eq!(lamp.sources[0].color, 0xFFFFFFE0);
    assert_eq!(lamp.source_material_names, vec!["bulb".to_string()]);

    let bookcase = home.piece("bookcase").unwrap().as_shelf_unit().unwrap();
    assert_eq!(bookcase.shelf_elevations.len(), 4);
}

#[test]
fn test_nested_groups_keep_their_own_children() {
    let home = sample();
    let dining = home.furniture.iter().find(|p| p.id == "dining").unwrap();
    let children: Vec<&str> = dining
        .as_group()
        .unwrap()
        .children
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(children, vec!["chair1", "chair2", "sideboard"]);

    let sideboard = dining.as_group().unwrap().children[2].as_group().unwrap();
    let nested: Vec<&str> = sideboard.children.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(nested, vec!["cabinet", "vase"]);

    // Grouped pieces are not top level furniture
    assert!(home.furniture.iter().all(|p| p.id != "chair1" && p.id != "vase"));
    assert!(home.piece("vase").is_some());
}

#[test]
fn test_group_geometry_is_derived() {
    let home = sample();
    let dining = home.piece("dining").unwrap();
    assert_close(dining.x, 150.0);
    assert_close(dining.width, 140.0);
    assert_close(dining.y, 201.25);
    assert_close(dining.depth, 242.5);
    assert_close(dining.elevation, 0.0);
    assert_close(dining.height, 110.0);
}

#[test]
fn test_walls() {
    let home = sample();
    let wall0 = home.wall("wall0").unwrap();
    assert_eq!(wall0.left_side, Some(Paint::Color(0xFFFFFFFF)));
    assert_eq!(
        wall0
            .right_side
            .as_ref()
            .and_then(Paint::texture)
            .and_then(|t| t.name.as_deref()),
        Some("Bricks")
    );
    assert_eq!(wall0.left_side_baseboard.as_ref().unwrap().height, 8.0);
    assert_eq!(wall0.top_color, Some(0xFF000000));
    assert_eq!(wall0.level, Some(Id::new("level0")));

    let wall1 = home.wall("wall1").unwrap();
    assert!(wall1.is_trapezoidal());
    let (start, end) = home.joined_walls(wall1);
    assert_eq!(start.map(|w| w.id.as_str()), Some("wall0"));
    assert_eq!(end.map(|w| w.id.as_str()), Some("wall2"));
}

#[test]
fn test_rooms_and_decorations() {
    let home = sample();
    let room = home.room("living").unwrap();
    assert_eq!(room.points.len(), 4);
    assert_eq!(room.points[2], (500.0, 400.0));
    assert_close(room.area(), 200_000.0);
    assert!(room.name_style.as_ref().unwrap().bold);
    assert!(matches!(room.floor, Some(Paint::Texture(_))));
    assert_eq!(room.ceiling, None);
    assert!(room.ceiling_flat);

    let polyline = &home.polylines[0];
    assert_eq!(polyline.dash_style, DashStyle::Dash);
    assert_eq!(polyline.end_arrow_style, ArrowStyle::Delta);
    assert_eq!(polyline.points.len(), 3);
    assert_eq!(polyline.level, Some(Id::new("level1")));

    let dimension = &home.dimension_lines[0];
    assert_eq!(dimension.offset, -30.0);
    assert_eq!(dimension.length_style.as_ref().unwrap().font_size, 18.0);

    let label = &home.labels[0];
    assert_eq!(label.text, "Living & dining");
    let style = label.style.as_ref().unwrap();
    assert_eq!(style.alignment, TextAlignment::Left);
    assert_eq!(style.font_name.as_deref(), Some("Serif"));
}

#[test]
fn test_self_join_is_the_only_warning() {
    let result = xml::from_str_with_warnings(SAMPLE, &HomeXmlOptions::default()).unwrap();
    let (home, warnings): (Home, Vec<String>) = result.into();
    assert_eq!(warnings.len(), 1, "{:?}", warnings);
    assert!(warnings[0].contains("wall2"));
    assert_eq!(home.wall("wall2").unwrap().wall_at_end, None);
    assert_eq!(
        home.wall("wall2").unwrap().wall_at_start,
        Some(Id::new("wall1"))
    );
}

#[test]
fn test_missing_cameras_get_defaults() {
    let home = xml::from_str("<home version='7200'/>", &HomeXmlOptions::default()).unwrap();
    assert_eq!(home.top_camera.kind, CameraKind::Top);
    assert_eq!(home.observer_camera.kind, CameraKind::Observer);
    assert!(home.print.is_none());
    assert_eq!(home.furniture_visible_properties.len(), 5);
}

#[test]
fn test_old_documents_default_models_off_center() {
    let document = r#"<home version='5000'>
        <pieceOfFurniture id='a' x='0' y='0' width='10' depth='10' height='10'/>
        <pieceOfFurniture id='b' x='0' y='0' width='10' depth='10' height='10' modelRotation='1 0 0 0 1 0 0 0 1'/>
    </home>"#;
    let home = xml::from_str(document, &HomeXmlOptions::default()).unwrap();
    assert!(!home.piece("a").unwrap().model_centered_at_origin);
    assert!(home.piece("b").unwrap().model_centered_at_origin);

    let unversioned = xml::from_str(
        "<home><pieceOfFurniture x='0' y='0' width='1' depth='1' height='1'/></home>",
        &HomeXmlOptions::default(),
    )
    .unwrap();
    assert_eq!(unversioned.version, 0);
    assert!(!unversioned.furniture[0].model_centered_at_origin);
}

#[test]
fn test_entities_without_level_attribute() {
    let document = r#"<home>
        <level id='l0' elevation='0' floorThickness='12' height='250'/>
        <wall xStart='0' yStart='0' xEnd='100' yEnd='0' thickness='10'/>
        <label level='missing' x='0' y='0'><text>Orphan</text></label>
    </home>"#;
    let result = xml::from_str_with_warnings(document, &HomeXmlOptions::default()).unwrap();
    assert!(result.is_warning());
    let home = result.unwrap();
    assert_eq!(home.walls[0].level, None);
    assert!(home.walls[0].id.as_str().starts_with("wall-"));
    assert_eq!(home.labels[0].level, None);
}
