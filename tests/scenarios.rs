#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use room_estimate::geometry::WallId;
use room_estimate::quantity::RoomMetrics;
use room_estimate::{
    compute_floor_area, compute_perimeter, AggregateCost, CalculateMaterials, Corner,
    EstimateRoom, MaterialKey, MaterialLedger, MaterialOptions, Meters, Opening, PriceCatalog,
    PriceTable, PriceTier, ResolveWalls, RoomGeometry,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn m(v: f64) -> Meters {
    Meters(v)
}

fn small_room() -> RoomGeometry {
    RoomGeometry::rectangle(m(4.0), m(3.0), m(2.5))
}

fn fixtures() -> MaterialOptions {
    MaterialOptions::default().with_fixtures(4, 3)
}

fn metrics(room: &RoomGeometry, openings: &[Opening], options: MaterialOptions) -> RoomMetrics {
    CalculateMaterials::new(room, openings, options)
        .execute_detailed()
        .unwrap()
        .metrics
}

#[test]
fn bare_rectangle() {
    init_tracing();
    let room = small_room();
    let metrics = metrics(&room, &[], fixtures());
    assert_relative_eq!(metrics.floor_area, 12.0);
    assert_relative_eq!(metrics.perimeter, 14.0);
    assert_relative_eq!(metrics.gross_wall_area, 35.0);
    assert_relative_eq!(metrics.net_wall_area, 35.0);

    let ledger = CalculateMaterials::new(&room, &[], fixtures()).execute().unwrap();
    assert_eq!(ledger.get(MaterialKey::FloorPanels), Some(14));
    assert_eq!(ledger.get(MaterialKey::Drywall), Some(13));
    assert_eq!(ledger.get(MaterialKey::Sockets), Some(4));
    assert_eq!(ledger.get(MaterialKey::Switches), Some(3));
}

#[test]
fn rectangle_with_door_and_window() {
    init_tracing();
    let room = small_room();
    let openings = [
        Opening::door(m(0.9), m(2.0), WallId(0)),
        Opening::window(m(1.5), m(1.2), WallId(1)),
    ];
    let metrics = metrics(&room, &openings, fixtures());
    assert_relative_eq!(metrics.door_area, 1.8, epsilon = 1e-9);
    assert_relative_eq!(metrics.window_area, 1.8, epsilon = 1e-9);
    assert_relative_eq!(metrics.net_wall_area, 31.4, epsilon = 1e-9);

    let ledger = CalculateMaterials::new(&room, &openings, fixtures())
        .execute()
        .unwrap();
    assert_eq!(ledger.get(MaterialKey::Paint), Some(8));
}

#[test]
fn l_shape_room() {
    init_tracing();
    let room = RoomGeometry::l_shape(m(4.0), m(4.0), m(2.0), m(2.0), Corner::BottomLeft, m(2.5));
    assert_relative_eq!(compute_floor_area(&room).unwrap(), 20.0);

    let ledger = CalculateMaterials::new(&room, &[], fixtures()).execute().unwrap();
    assert_eq!(ledger.get(MaterialKey::FloorPanels), Some(23));
    assert_eq!(ResolveWalls::new(&room).execute().unwrap().len(), 7);

    let mut turned = room.clone();
    turned.corner = Some(Corner::TopRight);
    assert_eq!(
        compute_perimeter(&room).unwrap(),
        compute_perimeter(&turned).unwrap()
    );
}

#[test]
fn l_shape_with_extension_longer_than_main() {
    init_tracing();
    let room = RoomGeometry::l_shape(m(4.0), m(3.0), m(2.0), m(5.0), Corner::BottomLeft, m(2.5));
    assert_relative_eq!(compute_floor_area(&room).unwrap(), 22.0);
    assert_relative_eq!(compute_perimeter(&room).unwrap(), 22.0);

    let walls = ResolveWalls::new(&room).execute().unwrap();
    assert_eq!(walls.len(), 7);
    assert_relative_eq!(walls.total_length(), 22.0, epsilon = 1e-9);

    let ledger = CalculateMaterials::new(&room, &[], fixtures()).execute().unwrap();
    assert_eq!(ledger.get(MaterialKey::FloorPanels), Some(26));
}

#[test]
fn l_shape_with_flush_extension_is_rejected() {
    let room = RoomGeometry::l_shape(m(4.0), m(3.0), m(2.0), m(3.0), Corner::BottomLeft, m(2.5));
    assert!(compute_floor_area(&room).unwrap_err().is_invalid_geometry());
    assert!(ResolveWalls::new(&room).execute().unwrap_err().is_invalid_geometry());
}

#[test]
fn rectangle_with_osb_floor() {
    init_tracing();
    let ledger = CalculateMaterials::new(&small_room(), &[], fixtures().with_osb_floor())
        .execute()
        .unwrap();
    for key in [
        MaterialKey::Osb,
        MaterialKey::OsbScrews,
        MaterialKey::Baseboards,
        MaterialKey::BaseboardEnds,
    ] {
        assert!(ledger.contains(key), "{key}");
    }
    // No doors: only the four corner pieces.
    assert_eq!(ledger.get(MaterialKey::BaseboardEnds), Some(4));

    let door = [Opening::door(m(0.9), m(2.0), WallId(3))];
    let ledger = CalculateMaterials::new(&small_room(), &door, fixtures().with_osb_floor())
        .execute()
        .unwrap();
    assert_eq!(ledger.get(MaterialKey::BaseboardEnds), Some(6));
}

#[test]
fn missing_price_costs_nothing() {
    let ledger: MaterialLedger = [(MaterialKey::FloorPanels, 14), (MaterialKey::Sockets, 4)]
        .into_iter()
        .collect();
    let prices: PriceTable = [(MaterialKey::FloorPanels, 45.0)].into_iter().collect();
    let costs = AggregateCost::new(&ledger, &prices).execute();
    assert_relative_eq!(costs.total_cost, 630.0);
}

#[test]
fn negative_switch_count_is_rejected() {
    let options = MaterialOptions::default().with_fixtures(0, -1);
    let err = CalculateMaterials::new(&small_room(), &[], options)
        .execute()
        .unwrap_err();
    assert!(err.is_invalid_options());
}

#[test]
fn every_quantity_is_a_whole_unit_and_cost_is_linear() {
    init_tracing();
    let rooms = [
        small_room(),
        RoomGeometry::l_shape(m(3.2), m(5.7), m(1.9), m(2.3), Corner::TopLeft, m(2.7)),
        RoomGeometry::l_shape(m(6.1), m(4.4), m(2.5), m(1.3), Corner::BottomRight, m(3.0)),
    ];
    let catalog = PriceCatalog::from_json(
        r#"{
            "standard": {
                "floorPanels": 42.5, "underlayment": 3.2, "paint": 8.9, "drywall": 11.4,
                "cwProfiles": 4.1, "uwProfiles": 3.6, "osb": 17.0, "hangers": 0.45,
                "cable15": 0.9, "cable25": 1.3, "junctionBox": 2.2, "sockets": 6.5
            }
        }"#,
    )
    .unwrap();
    let prices = catalog.table(PriceTier::Standard).unwrap();
    let options = fixtures().with_osb_floor().with_suspended_ceiling();

    for room in &rooms {
        let estimate = EstimateRoom::new(room, &[], options).execute(prices).unwrap();
        let expected: f64 = estimate
            .ledger
            .iter()
            .map(|(key, quantity)| f64::from(quantity) * prices.price(key))
            .sum();
        assert_relative_eq!(estimate.costs.total_cost, expected, epsilon = 1e-9);

        let walls = ResolveWalls::new(room).execute().unwrap();
        assert_relative_eq!(
            walls.total_length(),
            compute_perimeter(room).unwrap(),
            epsilon = 1e-9
        );
    }
}
