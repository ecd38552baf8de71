use orrery_engine::bridge::protocol::{
    HEADER_CLEAR_B, HEADER_CLEAR_G, HEADER_CLEAR_R, HEADER_EVENT_COUNT, HEADER_FLOATS,
    HEADER_FRAME_COUNTER, HEADER_INSTANCE_COUNT, HEADER_MAX_EVENTS, HEADER_MAX_INSTANCES,
    HEADER_PROTOCOL_VERSION, HEADER_VIEWPORT_HEIGHT, HEADER_VIEWPORT_WIDTH, PROTOCOL_VERSION,
};
use orrery_engine::systems::render::build_render_buffer;
use orrery_engine::{
    CameraUniform, EngineContext, InputEvent, InputQueue, ProtocolLayout, RenderBuffer,
    RenderContext, SimConfig, Simulation,
};

use crate::panel::DomPanel;

/// Generic simulation runner that wires up the engine loop.
///
/// Each concrete simulation creates a `thread_local!` SimRunner and exports
/// free functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct SimRunner<S: Simulation> {
    sim: S,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    camera: CameraUniform,
    header: [f32; HEADER_FLOATS],
    config: SimConfig,
    layout: ProtocolLayout,
    dom_panel: Option<DomPanel>,
    initialized: bool,
}

impl<S: Simulation> SimRunner<S> {
    pub fn new(sim: S) -> Self {
        let config = sim.config();
        let layout = ProtocolLayout::from_config(&config);
        Self {
            ctx: EngineContext::new(&config),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            camera: CameraUniform::default(),
            header: [0.0; HEADER_FLOATS],
            sim,
            layout,
            config,
            dom_panel: None,
            initialized: false,
        }
    }

    /// Initialize the simulation. Call once after construction.
    pub fn init(&mut self) {
        self.sim.init(&mut self.ctx);
        self.initialized = true;
        self.rebuild_frame();
    }

    /// Attach the DOM element the text panel renders into.
    /// An existing child button becomes the panel chrome.
    pub fn mount_panel(&mut self, element_id: &str) {
        match DomPanel::mount(element_id) {
            Some(dom) => {
                if let Some(chrome) = dom.existing_chrome() {
                    self.ctx.panel.set_chrome(chrome);
                }
                self.dom_panel = Some(dom);
            }
            None => log::warn!("panel element #{} not found", element_id),
        }
    }

    /// Set the viewport directly, outside the input queue.
    /// Used to seed the real window size before the first frame.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.ctx.resize(width, height);
        self.write_header();
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: update once, rebuild buffers.
    pub fn tick(&mut self, _dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.begin_frame();
        self.sim.update(&mut self.ctx, &self.input);
        self.input.drain();

        self.rebuild_frame();
    }

    fn rebuild_frame(&mut self) {
        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        {
            let mut render_ctx = RenderContext {
                render_buffer: &mut self.render_buffer,
            };
            self.sim.render(&mut render_ctx);
        }

        self.camera = self.ctx.camera.uniform();
        self.write_header();
    }

    fn write_header(&mut self) {
        let viewport = self.ctx.viewport();
        let h = &mut self.header;
        h[HEADER_FRAME_COUNTER] = self.ctx.frame() as f32;
        h[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        h[HEADER_MAX_INSTANCES] = self.layout.max_instances as f32;
        h[HEADER_INSTANCE_COUNT] = self.render_buffer.instance_count() as f32;
        h[HEADER_MAX_EVENTS] = self.layout.max_events as f32;
        h[HEADER_EVENT_COUNT] = self.ctx.events.len() as f32;
        h[HEADER_VIEWPORT_WIDTH] = viewport.x;
        h[HEADER_VIEWPORT_HEIGHT] = viewport.y;
        h[HEADER_CLEAR_R] = self.config.clear_color.r;
        h[HEADER_CLEAR_G] = self.config.clear_color.g;
        h[HEADER_CLEAR_B] = self.config.clear_color.b;
    }

    /// Push the panel state into the mounted DOM element, if any.
    pub fn sync_panel(&mut self) {
        if let Some(dom) = self.dom_panel.as_mut() {
            dom.sync(&self.ctx.panel);
        }
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn simulation(&self) -> &S {
        &self.sim
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        (&self.camera as *const CameraUniform).cast()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn sim_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn sim_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn viewport_width(&self) -> f32 {
        self.ctx.viewport().x
    }

    pub fn viewport_height(&self) -> f32 {
        self.ctx.viewport().y
    }

    // ---- Panel accessors ----

    pub fn panel_html(&self) -> String {
        self.ctx.panel.html()
    }

    pub fn panel_visible(&self) -> bool {
        self.ctx.panel.is_visible()
    }

    pub fn panel_revision(&self) -> u32 {
        self.ctx.panel.revision()
    }

    // ---- Capacity accessors ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
