//! The geometry set container.

use super::accessor::SubPoints;
use super::cursor::{Cursor, CursorMut, CursorOptions};
use super::element::{Element, ElementMut};
use super::shape::{GeometryDimension, GeometryShape};
use crate::math::FixedVector;

/// Texture coordinates are always planar.
pub const TEXCOORD_COMPONENTS: usize = 2;

/// Fixed-size collection of homogeneous shapes.
///
/// `D` is the positional dimension (2 or 3) and `S` the number of
/// sub-points per element (1 = point, 2 = line, 3 = triangle, 4 = quad).
/// Any other value fails to compile.
///
/// The set owns three contiguous buffers, laid out
/// `[element][sub-point][component]`:
///
/// | buffer     | length             |
/// |------------|--------------------|
/// | indices    | `size`             |
/// | vertices   | `size * D * S`     |
/// | texcoords  | `size * 2 * S`     |
///
/// Lengths are fixed at construction. The raw slices serve bulk paths such
/// as GPU upload; cursors give checked per-element access.
#[derive(Clone)]
pub struct GeometrySet<const D: usize, const S: usize> {
    size: usize,
    indices: Box<[i32]>,
    vertices: Box<[f32]>,
    texcoords: Box<[f32]>,
}

impl<const D: usize, const S: usize> GeometrySet<D, S> {
    #[allow(clippy::manual_range_contains)]
    const VALID_PARAMS: () = {
        assert!(D == 2 || D == 3, "GeometrySet dimension must be 2 or 3");
        assert!(S >= 1 && S <= 4, "GeometrySet shape must have 1 to 4 sub-points");
    };

    /// Floats per element in the vertex buffer.
    pub const VERTEX_STRIDE: usize = D * S;

    /// Floats per element in the texture-coordinate buffer.
    pub const TEXCOORD_STRIDE: usize = TEXCOORD_COMPONENTS * S;

    /// Allocate a set of `size` elements with zero-filled buffers.
    ///
    /// Allocation failure aborts like any other out-of-memory condition.
    pub fn new(size: usize) -> Self {
        let () = Self::VALID_PARAMS;
        let set = Self {
            size,
            indices: vec![0; size].into_boxed_slice(),
            vertices: vec![0.0; size * Self::VERTEX_STRIDE].into_boxed_slice(),
            texcoords: vec![0.0; size * Self::TEXCOORD_STRIDE].into_boxed_slice(),
        };
        log::trace!(
            "Allocated GeometrySet<{D}, {S}>: {size} elements, {} vertex floats, {} texcoord floats",
            set.vertices.len(),
            set.texcoords.len()
        );
        set
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn dimension(&self) -> GeometryDimension {
        if D == 2 {
            GeometryDimension::D2
        } else {
            GeometryDimension::D3
        }
    }

    pub fn shape(&self) -> GeometryShape {
        match S {
            1 => GeometryShape::Point,
            2 => GeometryShape::Line,
            3 => GeometryShape::Triangle,
            _ => GeometryShape::Quad,
        }
    }

    /// Length of the index buffer.
    pub fn index_len(&self) -> usize {
        self.indices.len()
    }

    /// Length of the vertex buffer in floats.
    pub fn vertex_len(&self) -> usize {
        self.vertices.len()
    }

    /// Length of the texture-coordinate buffer in floats (`size * 2 * S`).
    pub fn texcoord_len(&self) -> usize {
        self.texcoords.len()
    }

    // ===== Raw buffers =====

    pub fn indices(&self) -> &[i32] {
        &self.indices
    }

    pub fn indices_mut(&mut self) -> &mut [i32] {
        &mut self.indices
    }

    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut [f32] {
        &mut self.vertices
    }

    pub fn texcoords(&self) -> &[f32] {
        &self.texcoords
    }

    pub fn texcoords_mut(&mut self) -> &mut [f32] {
        &mut self.texcoords
    }

    /// Vertex buffer viewed as one vector per sub-point.
    pub fn vertex_points(&self) -> &[FixedVector<D, f32>] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn vertex_points_mut(&mut self) -> &mut [FixedVector<D, f32>] {
        bytemuck::cast_slice_mut(&mut self.vertices)
    }

    /// Index buffer as raw bytes, for upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Vertex buffer as raw bytes, for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Texture-coordinate buffer as raw bytes, for upload.
    pub fn texcoord_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.texcoords)
    }

    pub(crate) fn buffers_mut(&mut self) -> (&mut [f32], &mut [f32]) {
        (&mut self.vertices, &mut self.texcoords)
    }

    // ===== Structured access =====

    /// Read-only cursor on the first element.
    pub fn cursor(&self) -> Cursor<'_, D, S> {
        Cursor::new(self, CursorOptions::default())
    }

    pub fn cursor_with(&self, options: CursorOptions) -> Cursor<'_, D, S> {
        Cursor::new(self, options)
    }

    /// Read-write cursor on the first element.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, D, S> {
        CursorMut::new(self, CursorOptions::default())
    }

    pub fn cursor_mut_with(&mut self, options: CursorOptions) -> CursorMut<'_, D, S> {
        CursorMut::new(self, options)
    }

    /// Iterate elements first to last.
    pub fn elements(&self) -> impl ExactSizeIterator<Item = Element<'_, D, S>> + '_ {
        self.indices
            .iter()
            .zip(self.vertices.chunks_exact(Self::VERTEX_STRIDE))
            .zip(self.texcoords.chunks_exact(Self::TEXCOORD_STRIDE))
            .map(|((&index, vert), texc)| Element {
                index,
                vert: SubPoints::new(vert),
                texc: SubPoints::new(texc),
            })
    }

    /// Iterate elements first to last with write access.
    pub fn elements_mut(&mut self) -> impl ExactSizeIterator<Item = ElementMut<'_, D, S>> + '_ {
        self.indices
            .iter_mut()
            .zip(self.vertices.chunks_exact_mut(Self::VERTEX_STRIDE))
            .zip(self.texcoords.chunks_exact_mut(Self::TEXCOORD_STRIDE))
            .map(|((index, vert), texc)| ElementMut {
                index,
                vert: SubPoints::new(vert),
                texc: SubPoints::new(texc),
            })
    }
}

impl<const D: usize, const S: usize> std::fmt::Debug for GeometrySet<D, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeometrySet")
            .field("dimension", &self.dimension())
            .field("shape", &self.shape())
            .field("size", &self.size)
            .field("vertex_len", &self.vertices.len())
            .field("texcoord_len", &self.texcoords.len())
            .finish()
    }
}
