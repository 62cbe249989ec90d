//! Surfaceless GLES 3.0 context for GL-backed tests.
//!
//! Opens the first EGL device, makes a context current without a window,
//! and renders into an offscreen framebuffer of the requested size.

#![allow(unsafe_code)]

use glow::HasContext;
use glutin::api::egl::context::PossiblyCurrentContext;
use glutin::api::egl::device::Device;
use glutin::api::egl::display::Display;
use glutin::config::{Api, ConfigSurfaceTypes, ConfigTemplateBuilder};
use glutin::context::{ContextApi, ContextAttributesBuilder, Version};
use glutin::prelude::*;
use std::ffi::CStr;

pub struct HeadlessGl {
    pub gl: glow::Context,
    _context: PossiblyCurrentContext,
    _display: Display,
}

impl HeadlessGl {
    /// Current context with a `width` x `height` RGBA8 + depth framebuffer
    /// bound and the viewport covering it.
    pub fn new(width: i32, height: i32) -> Self {
        let device = Device::query_devices()
            .expect("EGL device enumeration")
            .next()
            .expect("no EGL device");
        let display = unsafe { Display::with_device(&device, None) }.expect("EGL display");

        let template = ConfigTemplateBuilder::new()
            .with_surface_type(ConfigSurfaceTypes::empty())
            .with_api(Api::GLES3)
            .build();
        let config = unsafe { display.find_configs(template) }
            .expect("EGL config query")
            .next()
            .expect("no GLES3 config");

        let attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::Gles(Some(Version::new(3, 0))))
            .build(None);
        let context = unsafe { display.create_context(&config, &attributes) }
            .expect("GLES 3.0 context")
            .make_current_surfaceless()
            .expect("surfaceless make_current");

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|s: &CStr| display.get_proc_address(s))
        };

        unsafe {
            let color = gl.create_renderbuffer().expect("color renderbuffer");
            gl.bind_renderbuffer(glow::RENDERBUFFER, Some(color));
            gl.renderbuffer_storage(glow::RENDERBUFFER, glow::RGBA8, width, height);
            let depth = gl.create_renderbuffer().expect("depth renderbuffer");
            gl.bind_renderbuffer(glow::RENDERBUFFER, Some(depth));
            gl.renderbuffer_storage(glow::RENDERBUFFER, glow::DEPTH_COMPONENT16, width, height);

            let fbo = gl.create_framebuffer().expect("framebuffer");
            gl.bind_framebuffer(glow::FRAMEBUFFER, Some(fbo));
            gl.framebuffer_renderbuffer(
                glow::FRAMEBUFFER,
                glow::COLOR_ATTACHMENT0,
                glow::RENDERBUFFER,
                Some(color),
            );
            gl.framebuffer_renderbuffer(
                glow::FRAMEBUFFER,
                glow::DEPTH_ATTACHMENT,
                glow::RENDERBUFFER,
                Some(depth),
            );
            assert_eq!(
                gl.check_framebuffer_status(glow::FRAMEBUFFER),
                glow::FRAMEBUFFER_COMPLETE
            );
            gl.viewport(0, 0, width, height);
        }

        Self {
            gl,
            _context: context,
            _display: display,
        }
    }
}
