//! Square-neighbourhood chunk search.

use orefinder_common::{ChunkCoord, ColumnPos};
use tracing::debug;

use crate::chunk::ChunkGenerator;
use crate::deposit::Placement;

/// Chunks visited for `center` and `radius`, in visiting order.
///
/// `dx` is the outer loop and `dz` the inner one, both over
/// `-radius..=radius`, giving `(2r + 1)²` chunks. A negative radius visits
/// nothing.
pub fn chunk_grid(center: ChunkCoord, radius: i32) -> impl Iterator<Item = ChunkCoord> {
    let radius = radius.max(-1);
    (-radius..=radius).flat_map(move |dx| (-radius..=radius).map(move |dz| center.offset(dx, dz)))
}

/// Collects the raw placements of every chunk within `radius` chunks of the
/// chunk containing `query`. No filtering happens here.
#[must_use]
pub fn search_radius(generator: &ChunkGenerator<'_>, query: ColumnPos, radius: i32) -> Vec<Placement> {
    let center = query.chunk();
    let mut placements = Vec::new();
    let mut chunks = 0usize;
    for chunk in chunk_grid(center, radius) {
        generator.generate_into(chunk, &mut placements);
        chunks += 1;
    }
    debug!(
        "searched {chunks} chunks around {center} (radius {radius}): {} placements",
        placements.len()
    );
    placements
}
