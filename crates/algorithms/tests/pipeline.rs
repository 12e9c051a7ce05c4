//! End-to-end refinement scenarios over in-memory scenes.

use skymask_algorithms::{run, RefineParams};
use skymask_core::mask::{MaskCode, COARSE_CLOUD, COARSE_FILL};
use skymask_core::raster::Raster;
use skymask_core::scene::{MemoryScene, MemorySink, FILL_VALUE};

/// Six uniform reflectance bands with the given per-band values, in
/// storage (B1, B2, B3, B4, B5, B7) order.
fn uniform_bands(rows: usize, cols: usize, values: [i16; 6]) -> Vec<Raster<i16>> {
    values
        .into_iter()
        .map(|v| Raster::filled(rows, cols, v))
        .collect()
}

/// Band values of a bright cloud deck: high reflectance everywhere, flat
/// spectrum, near-zero indices.
fn cloud_values() -> [i16; 6] {
    [4000; 6]
}

/// Band values of a vegetated surface: dark visible bands, strong NIR.
/// The ensemble votes cloud-free on this spectrum.
fn vegetation_values() -> [i16; 6] {
    [900, 800, 700, 2400, 600, 300]
}

#[test]
fn flagged_vegetation_is_downgraded_to_possibly_cloud() {
    // The coarse mask over-flags a vegetated block; the ensemble refuses
    // to confirm it, so the block comes out possibly-cloud rather than
    // cloud.
    let rows = 20;
    let mut coarse = Raster::filled(rows, rows, 0u8);
    for r in 6..14 {
        for c in 6..14 {
            coarse.set(r, c, COARSE_CLOUD).unwrap();
        }
    }
    let scene = MemoryScene::new(uniform_bands(rows, rows, vegetation_values()), coarse).unwrap();

    let mut sink = MemorySink::new();
    run(&scene, &mut sink, &RefineParams::default()).unwrap();

    let mask = sink.mask().unwrap();
    assert_eq!(mask.get(10, 10).unwrap(), MaskCode::PossibleCloud.code());
    assert_eq!(mask.get(6, 6).unwrap(), MaskCode::PossibleCloud.code());
    assert_eq!(mask.get(0, 0).unwrap(), MaskCode::Clear.code());
}

#[test]
fn confirmed_speckle_is_opened_away_but_blocks_survive() {
    // Bright scene: the ensemble confirms every flagged pixel. The 5x5
    // opening erases the isolated flagged pixel and keeps the solid
    // block, so the speckle is reported possibly-cloud and the block
    // cloud.
    let rows = 20;
    let mut coarse = Raster::filled(rows, rows, 0u8);
    for r in 3..11 {
        for c in 3..11 {
            coarse.set(r, c, COARSE_CLOUD).unwrap();
        }
    }
    coarse.set(15, 15, COARSE_CLOUD).unwrap();
    let scene = MemoryScene::new(uniform_bands(rows, rows, cloud_values()), coarse).unwrap();

    let mut sink = MemorySink::new();
    run(&scene, &mut sink, &RefineParams::default()).unwrap();

    let mask = sink.mask().unwrap();
    assert_eq!(mask.get(6, 6).unwrap(), MaskCode::Cloud.code());
    assert_eq!(mask.get(3, 3).unwrap(), MaskCode::Cloud.code());
    assert_eq!(
        mask.get(15, 15).unwrap(),
        MaskCode::PossibleCloud.code(),
        "an isolated confirmed pixel must be downgraded by the opening"
    );
    assert_eq!(mask.get(0, 0).unwrap(), MaskCode::Clear.code());
}

#[test]
fn fill_plane_and_water_layer_flow_into_the_mask() {
    // Right half of the scene is fill; a water strip crosses the left
    // half. Fill stays fill, recognized water codes become water, an
    // unrecognized code stays clear.
    let rows = 16;
    let mut bands = uniform_bands(rows, rows, vegetation_values());
    for band in &mut bands {
        for r in 0..rows {
            for c in 8..rows {
                band.set(r, c, FILL_VALUE).unwrap();
            }
        }
    }
    let mut coarse = Raster::filled(rows, rows, 0u8);
    for r in 0..rows {
        for c in 8..rows {
            coarse.set(r, c, COARSE_FILL).unwrap();
        }
    }
    let mut water = Raster::filled(rows, rows, 0u8);
    for c in 0..8 {
        water.set(2, c, 2).unwrap();
        water.set(3, c, 5).unwrap();
    }
    let scene = MemoryScene::new(bands, coarse)
        .unwrap()
        .with_water(water)
        .unwrap();

    let mut sink = MemorySink::new();
    let params = RefineParams {
        variance: false,
        ..RefineParams::default()
    };
    run(&scene, &mut sink, &params).unwrap();

    let mask = sink.mask().unwrap();
    assert_eq!(mask.get(5, 12).unwrap(), MaskCode::Fill.code());
    assert_eq!(mask.get(2, 4).unwrap(), MaskCode::Water.code());
    assert_eq!(mask.get(3, 4).unwrap(), MaskCode::Clear.code());
    assert_eq!(mask.get(10, 4).unwrap(), MaskCode::Clear.code());
}

#[test]
fn buffered_cloud_grows_past_the_coarse_flag() {
    // With buffering enabled the confirmed block bleeds a diamond ring
    // into pixels the coarse mask never flagged.
    let rows = 24;
    let mut coarse = Raster::filled(rows, rows, 0u8);
    for r in 8..16 {
        for c in 8..16 {
            coarse.set(r, c, COARSE_CLOUD).unwrap();
        }
    }
    let scene = MemoryScene::new(uniform_bands(rows, rows, cloud_values()), coarse).unwrap();

    let mut sink = MemorySink::new();
    let params = RefineParams {
        variance: false,
        buffer_distance: Some(2),
        ..RefineParams::default()
    };
    run(&scene, &mut sink, &params).unwrap();

    let mask = sink.mask().unwrap();
    assert_eq!(mask.get(12, 12).unwrap(), MaskCode::Cloud.code());
    // Two pixels above the block: inside the buffer, outside the flag
    assert_eq!(mask.get(6, 12).unwrap(), MaskCode::Cloud.code());
    assert_eq!(mask.get(5, 12).unwrap(), MaskCode::Clear.code());
}

#[test]
fn unflagged_scene_stays_clear() {
    let rows = 16;
    let scene = MemoryScene::new(
        uniform_bands(rows, rows, cloud_values()),
        Raster::filled(rows, rows, 0u8),
    )
    .unwrap();

    let mut sink = MemorySink::new();
    run(&scene, &mut sink, &RefineParams::default()).unwrap();

    let mask = sink.mask().unwrap();
    for r in 0..rows {
        for c in 0..rows {
            assert_eq!(
                mask.get(r, c).unwrap(),
                MaskCode::Clear.code(),
                "nothing flagged upstream may become cloud at ({}, {})",
                r,
                c
            );
        }
    }
}
