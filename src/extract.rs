//! Dominant colour extraction.
//!
//! Advisory helper for colour suggestions: reduces an image to its most
//! representative colours. Two strategies sit behind one interface — plain
//! frequency counting (default) and a small k-means clustering pass.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::{Result, RetintError};
use crate::types::Colour;

/// Working resolution the input is downsampled to before analysis.
const SAMPLE_EDGE: u32 = 100;

/// Number of refinement passes for the k-means strategy.
const KMEANS_ITERATIONS: usize = 10;

/// How representative colours are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractStrategy {
    /// Most frequent exact pixel values, ties broken by first encounter.
    #[default]
    Frequency,
    /// Centroids of k-means clusters, ordered by cluster size.
    KMeans,
}

impl ExtractStrategy {
    pub fn name(self) -> &'static str {
        match self {
            ExtractStrategy::Frequency => "frequency",
            ExtractStrategy::KMeans => "kmeans",
        }
    }
}

impl fmt::Display for ExtractStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExtractStrategy {
    type Err = RetintError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "frequency" => Ok(ExtractStrategy::Frequency),
            "kmeans" => Ok(ExtractStrategy::KMeans),
            _ => Err(RetintError::Format {
                message: format!("Unknown extraction strategy: {}", s),
                help: Some("Expected one of: frequency, kmeans".to_string()),
            }),
        }
    }
}

/// Extract up to `max_colours` representative colours from an image.
///
/// The image is downsampled to 100×100 first; fully transparent pixels are
/// ignored. Output is ordered most-dominant first.
pub fn extract(
    image: &RgbaImage,
    max_colours: usize,
    strategy: ExtractStrategy,
) -> Result<Vec<Colour>> {
    if image.width() == 0 || image.height() == 0 {
        return Err(RetintError::Dimension {
            message: "Cannot extract colours from a zero-area image".to_string(),
        });
    }
    if max_colours == 0 {
        return Ok(Vec::new());
    }

    let sample = imageops::resize(image, SAMPLE_EDGE, SAMPLE_EDGE, FilterType::Triangle);
    let pixels: Vec<[u8; 3]> = sample
        .pixels()
        .filter(|p| p.0[3] != 0)
        .map(|p| [p.0[0], p.0[1], p.0[2]])
        .collect();

    let colours = match strategy {
        ExtractStrategy::Frequency => by_frequency(&pixels, max_colours),
        ExtractStrategy::KMeans => by_kmeans(&pixels, max_colours),
    };

    Ok(colours)
}

/// Count exact pixel values; most frequent first, ties by first encounter.
fn by_frequency(pixels: &[[u8; 3]], max_colours: usize) -> Vec<Colour> {
    let mut counts: HashMap<[u8; 3], (usize, usize)> = HashMap::new();
    for (i, &rgb) in pixels.iter().enumerate() {
        let entry = counts.entry(rgb).or_insert((0, i));
        entry.0 += 1;
    }

    let mut ranked: Vec<([u8; 3], (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    ranked.truncate(max_colours);

    ranked
        .into_iter()
        .map(|(rgb, _)| Colour::rgb(rgb[0], rgb[1], rgb[2]))
        .collect()
}

/// Cluster pixels with k-means and return centroids ordered by cluster size.
///
/// Centroids are seeded from evenly spaced pixels, keeping the result
/// deterministic for a given input.
fn by_kmeans(pixels: &[[u8; 3]], max_colours: usize) -> Vec<Colour> {
    if pixels.is_empty() {
        return Vec::new();
    }

    let k = max_colours.min(pixels.len());
    let mut centroids: Vec<[f32; 3]> = (0..k)
        .map(|i| {
            let p = pixels[i * pixels.len() / k];
            [p[0] as f32, p[1] as f32, p[2] as f32]
        })
        .collect();

    let mut assignments = vec![0usize; pixels.len()];
    for _ in 0..KMEANS_ITERATIONS {
        for (pixel, slot) in pixels.iter().zip(assignments.iter_mut()) {
            *slot = nearest_centroid(*pixel, &centroids);
        }

        let mut sums = vec![[0.0f32; 3]; k];
        let mut sizes = vec![0usize; k];
        for (pixel, &cluster) in pixels.iter().zip(assignments.iter()) {
            for c in 0..3 {
                sums[cluster][c] += pixel[c] as f32;
            }
            sizes[cluster] += 1;
        }

        for (i, centroid) in centroids.iter_mut().enumerate() {
            // An empty cluster keeps its previous centroid
            if sizes[i] > 0 {
                for c in 0..3 {
                    centroid[c] = sums[i][c] / sizes[i] as f32;
                }
            }
        }
    }

    let mut sizes = vec![0usize; k];
    for &cluster in &assignments {
        sizes[cluster] += 1;
    }

    let mut order: Vec<usize> = (0..k).collect();
    order.sort_by(|&a, &b| sizes[b].cmp(&sizes[a]).then(a.cmp(&b)));

    order
        .into_iter()
        .filter(|&i| sizes[i] > 0)
        .map(|i| {
            Colour::rgb(
                centroids[i][0].round().clamp(0.0, 255.0) as u8,
                centroids[i][1].round().clamp(0.0, 255.0) as u8,
                centroids[i][2].round().clamp(0.0, 255.0) as u8,
            )
        })
        .collect()
}

fn nearest_centroid(pixel: [u8; 3], centroids: &[[f32; 3]]) -> usize {
    let mut best = 0;
    let mut best_dist = f32::MAX;
    for (i, centroid) in centroids.iter().enumerate() {
        let dist: f32 = (0..3)
            .map(|c| {
                let d = pixel[c] as f32 - centroid[c];
                d * d
            })
            .sum();
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}
