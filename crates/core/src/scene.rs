//! Scene interfaces to the I/O layer.
//!
//! The pipeline never opens files itself. A [`SceneSource`] hands it
//! reflectance bands (line windows or whole bands), the coarse cloud mask
//! and an optional water layer; a [`SceneSink`] receives the derived
//! products. [`MemoryScene`] and [`MemorySink`] implement both in memory
//! for tests and for embedding callers that already hold the scene.

use crate::error::{Error, Result};
use crate::raster::Raster;
use ndarray::s;

/// Fill sentinel for scaled reflectance.
pub const FILL_VALUE: i16 = -9999;

/// Saturation sentinel for scaled reflectance.
pub const SATURATE_VALUE: i16 = 20000;

/// Scale factor converting scaled reflectance to natural units.
pub const REFLECTANCE_SCALE: f64 = 0.0001;

/// Reflectance bands consumed by the pipeline (TM numbering; thermal band
/// 6 does not participate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    B1,
    B2,
    B3,
    B4,
    B5,
    B7,
}

impl Band {
    /// All participating bands, in storage order.
    pub const ALL: [Band; 6] = [Band::B1, Band::B2, Band::B3, Band::B4, Band::B5, Band::B7];

    /// Storage index of this band in [`Band::ALL`] order.
    pub fn index(self) -> usize {
        match self {
            Band::B1 => 0,
            Band::B2 => 1,
            Band::B3 => 2,
            Band::B4 => 3,
            Band::B5 => 4,
            Band::B7 => 5,
        }
    }

    /// Band name as used in product layer naming
    pub fn name(self) -> &'static str {
        match self {
            Band::B1 => "b1",
            Band::B2 => "b2",
            Band::B3 => "b3",
            Band::B4 => "b4",
            Band::B5 => "b5",
            Band::B7 => "b7",
        }
    }
}

/// Derived spectral index layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexLayer {
    Ndvi,
    Ndsi,
}

/// Windowed-variance product layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarianceLayer {
    Band(Band),
    Index(IndexLayer),
}

/// Supplies scene data to the pipeline.
pub trait SceneSource {
    /// Number of scene lines
    fn nlines(&self) -> usize;

    /// Number of samples per line
    fn nsamps(&self) -> usize;

    /// Fill sentinel of the reflectance bands
    fn fill_value(&self) -> i16;

    /// Saturation sentinel of the reflectance bands
    fn saturation_value(&self) -> i16;

    /// Scale factor converting scaled reflectance to natural units
    fn scale_factor(&self) -> f64;

    /// Read a contiguous window of scene lines from one reflectance band.
    /// The returned raster carries the fill and saturation sentinels.
    fn read_band_window(&self, band: Band, start_line: usize, nlines: usize)
        -> Result<Raster<i16>>;

    /// Read a whole reflectance band
    fn read_band(&self, band: Band) -> Result<Raster<i16>> {
        self.read_band_window(band, 0, self.nlines())
    }

    /// Read the upstream coarse cloud mask
    fn read_coarse_mask(&self) -> Result<Raster<u8>>;

    /// Read the upstream water-confidence layer, if the scene has one
    fn read_water_mask(&self) -> Result<Option<Raster<u8>>>;
}

/// Receives the pipeline's output products.
pub trait SceneSink {
    /// Write a derived spectral index layer
    fn write_index(&mut self, layer: IndexLayer, raster: &Raster<f64>) -> Result<()>;

    /// Write a windowed-variance layer
    fn write_variance(&mut self, layer: VarianceLayer, raster: &Raster<f64>) -> Result<()>;

    /// Write the final refined mask
    fn write_mask(&mut self, raster: &Raster<u8>) -> Result<()>;
}

/// An in-memory scene, holding all six reflectance bands plus the masks.
#[derive(Debug, Clone)]
pub struct MemoryScene {
    bands: Vec<Raster<i16>>,
    coarse: Raster<u8>,
    water: Option<Raster<u8>>,
    fill: i16,
    saturation: i16,
    scale: f64,
}

impl MemoryScene {
    /// Create a scene from six reflectance bands (in [`Band::ALL`] order)
    /// and a coarse cloud mask. All rasters must share one shape.
    pub fn new(bands: Vec<Raster<i16>>, coarse: Raster<u8>) -> Result<Self> {
        if bands.len() != Band::ALL.len() {
            return Err(Error::InvalidParameter {
                name: "bands",
                value: bands.len().to_string(),
                reason: format!("expected {} reflectance bands", Band::ALL.len()),
            });
        }
        let (rows, cols) = coarse.shape();
        for band in &bands {
            if band.shape() != (rows, cols) {
                let (ar, ac) = band.shape();
                return Err(Error::SizeMismatch {
                    er: rows,
                    ec: cols,
                    ar,
                    ac,
                });
            }
        }
        Ok(Self {
            bands,
            coarse,
            water: None,
            fill: FILL_VALUE,
            saturation: SATURATE_VALUE,
            scale: REFLECTANCE_SCALE,
        })
    }

    /// Attach a water-confidence layer
    pub fn with_water(mut self, water: Raster<u8>) -> Result<Self> {
        if water.shape() != self.coarse.shape() {
            let (er, ec) = self.coarse.shape();
            let (ar, ac) = water.shape();
            return Err(Error::SizeMismatch { er, ec, ar, ac });
        }
        self.water = Some(water);
        Ok(self)
    }

    /// Override the reflectance sentinels and scale factor
    pub fn with_reflectance_meta(mut self, fill: i16, saturation: i16, scale: f64) -> Self {
        self.fill = fill;
        self.saturation = saturation;
        self.scale = scale;
        self
    }
}

impl SceneSource for MemoryScene {
    fn nlines(&self) -> usize {
        self.coarse.rows()
    }

    fn nsamps(&self) -> usize {
        self.coarse.cols()
    }

    fn fill_value(&self) -> i16 {
        self.fill
    }

    fn saturation_value(&self) -> i16 {
        self.saturation
    }

    fn scale_factor(&self) -> f64 {
        self.scale
    }

    fn read_band_window(
        &self,
        band: Band,
        start_line: usize,
        nlines: usize,
    ) -> Result<Raster<i16>> {
        if start_line + nlines > self.nlines() {
            return Err(Error::IndexOutOfBounds {
                row: start_line + nlines,
                col: 0,
                rows: self.nlines(),
                cols: self.nsamps(),
            });
        }
        let source = &self.bands[band.index()];
        let window = source
            .data()
            .slice(s![start_line..start_line + nlines, ..])
            .to_owned();
        let mut raster = Raster::from_array(window);
        raster.set_nodata(Some(self.fill));
        raster.set_saturation(Some(self.saturation));
        Ok(raster)
    }

    fn read_coarse_mask(&self) -> Result<Raster<u8>> {
        Ok(self.coarse.clone())
    }

    fn read_water_mask(&self) -> Result<Option<Raster<u8>>> {
        Ok(self.water.clone())
    }
}

/// Collects pipeline products in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    indices: Vec<(IndexLayer, Raster<f64>)>,
    variances: Vec<(VarianceLayer, Raster<f64>)>,
    mask: Option<Raster<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored index layer, if written
    pub fn index(&self, layer: IndexLayer) -> Option<&Raster<f64>> {
        self.indices.iter().find(|(l, _)| *l == layer).map(|(_, r)| r)
    }

    /// The stored variance layer, if written
    pub fn variance(&self, layer: VarianceLayer) -> Option<&Raster<f64>> {
        self.variances
            .iter()
            .find(|(l, _)| *l == layer)
            .map(|(_, r)| r)
    }

    /// The final refined mask, if written
    pub fn mask(&self) -> Option<&Raster<u8>> {
        self.mask.as_ref()
    }
}

impl SceneSink for MemorySink {
    fn write_index(&mut self, layer: IndexLayer, raster: &Raster<f64>) -> Result<()> {
        self.indices.retain(|(l, _)| *l != layer);
        self.indices.push((layer, raster.clone()));
        Ok(())
    }

    fn write_variance(&mut self, layer: VarianceLayer, raster: &Raster<f64>) -> Result<()> {
        self.variances.retain(|(l, _)| *l != layer);
        self.variances.push((layer, raster.clone()));
        Ok(())
    }

    fn write_mask(&mut self, raster: &Raster<u8>) -> Result<()> {
        self.mask = Some(raster.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_bands(rows: usize, cols: usize, value: i16) -> Vec<Raster<i16>> {
        Band::ALL
            .iter()
            .map(|_| Raster::filled(rows, cols, value))
            .collect()
    }

    #[test]
    fn test_memory_scene_window_read() {
        let mut bands = uniform_bands(6, 4, 100);
        bands[Band::B4.index()].set(3, 2, 777).unwrap();
        let scene = MemoryScene::new(bands, Raster::new(6, 4)).unwrap();

        let window = scene.read_band_window(Band::B4, 2, 3).unwrap();
        assert_eq!(window.shape(), (3, 4));
        // Scene line 3 is window line 1
        assert_eq!(window.get(1, 2).unwrap(), 777);
        assert_eq!(window.nodata(), Some(FILL_VALUE));
        assert_eq!(window.saturation(), Some(SATURATE_VALUE));
    }

    #[test]
    fn test_memory_scene_rejects_band_count() {
        let bands = uniform_bands(4, 4, 0)[..5].to_vec();
        assert!(MemoryScene::new(bands, Raster::new(4, 4)).is_err());
    }

    #[test]
    fn test_memory_scene_rejects_shape_mismatch() {
        let mut bands = uniform_bands(4, 4, 0);
        bands[2] = Raster::new(4, 5);
        assert!(MemoryScene::new(bands, Raster::new(4, 4)).is_err());
    }

    #[test]
    fn test_memory_scene_window_bounds() {
        let scene = MemoryScene::new(uniform_bands(4, 4, 0), Raster::new(4, 4)).unwrap();
        assert!(scene.read_band_window(Band::B1, 2, 3).is_err());
    }

    #[test]
    fn test_memory_sink_overwrites_layer() {
        let mut sink = MemorySink::new();
        sink.write_index(IndexLayer::Ndvi, &Raster::filled(2, 2, 0.1))
            .unwrap();
        sink.write_index(IndexLayer::Ndvi, &Raster::filled(2, 2, 0.5))
            .unwrap();

        let stored = sink.index(IndexLayer::Ndvi).unwrap();
        assert_eq!(stored.get(0, 0).unwrap(), 0.5);
        assert!(sink.index(IndexLayer::Ndsi).is_none());
    }
}
