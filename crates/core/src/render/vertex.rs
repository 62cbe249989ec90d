//! GPU-side vertex state for the benchmark quad.
//!
//! One vertex array object holding one buffer per [`Attrib`] stream.
//! Created once, bound for the rest of the run.

use crate::error::BenchError;
use crate::quad::Attrib;

/// The quad's vertex array and its four attribute buffers.
pub struct QuadVertices {
    vao: glow::VertexArray,
    buffers: Vec<glow::Buffer>,
}

impl QuadVertices {
    /// Uploads every attribute stream, enables it at its fixed location,
    /// and leaves the vertex array bound.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::Resource` if the vertex array or a buffer
    /// cannot be created.
    #[allow(unsafe_code)]
    pub fn upload(gl: &glow::Context) -> Result<Self, BenchError> {
        use glow::HasContext;

        // SAFETY: glow wraps raw GL calls as unsafe. Buffers are filled from
        // static f32 slices and described with their own component counts.
        let vao = unsafe { gl.create_vertex_array().map_err(BenchError::Resource)? };
        unsafe { gl.bind_vertex_array(Some(vao)) };

        let mut buffers = Vec::with_capacity(Attrib::ALL.len());
        for attrib in Attrib::ALL {
            let buffer = unsafe { gl.create_buffer().map_err(BenchError::Resource)? };
            unsafe {
                gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
                gl.buffer_data_u8_slice(
                    glow::ARRAY_BUFFER,
                    bytemuck::cast_slice(attrib.data()),
                    glow::STATIC_DRAW,
                );
                gl.enable_vertex_attrib_array(attrib.location());
                gl.vertex_attrib_pointer_f32(
                    attrib.location(),
                    attrib.components(),
                    glow::FLOAT,
                    false,
                    attrib.stride(),
                    0,
                );
            }
            buffers.push(buffer);
        }

        unsafe { gl.bind_buffer(glow::ARRAY_BUFFER, None) };

        Ok(Self { vao, buffers })
    }

    /// Deletes the vertex array and its buffers.
    #[allow(unsafe_code)]
    pub fn destroy(&self, gl: &glow::Context) {
        use glow::HasContext;

        // SAFETY: all handles were created in upload().
        unsafe {
            gl.bind_vertex_array(None);
            gl.delete_vertex_array(self.vao);
            for &buffer in &self.buffers {
                gl.delete_buffer(buffer);
            }
        }
    }
}
