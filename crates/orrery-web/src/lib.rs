pub mod panel;
pub mod runner;
pub mod window;

pub use orrery_engine as engine;
pub use panel::DomPanel;
pub use runner::SimRunner;

/// Generate all `#[wasm_bindgen]` exports for a simulation.
///
/// Generates:
/// - `thread_local!` storage for the SimRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (sim_init, sim_tick, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MySim;
///
/// orrery_web::export_simulation!(MySim, "my-sim");
/// // or, with a DOM text panel:
/// orrery_web::export_simulation!(MySim, "my-sim", panel = "info-panel");
/// ```
///
/// The simulation type must implement `orrery_engine::Simulation` and provide `new()`.
#[macro_export]
macro_rules! export_simulation {
    (@exports $sim_type:ty, $sim_name:literal, $panel:expr) => {
        use std::cell::RefCell;
        use $crate::engine::InputEvent;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SimRunner<$sim_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::SimRunner<$sim_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow
                    .as_mut()
                    .expect("Simulation not initialized. Call sim_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn sim_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let runner = $crate::SimRunner::new(<$sim_type>::new());
            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| {
                let panel: Option<&str> = $panel;
                if let Some(id) = panel {
                    r.mount_panel(id);
                }
                if let Some((width, height)) = $crate::window::inner_size() {
                    r.resize(width, height);
                }
                r.init();
                r.sync_panel();
            });
            log::info!("{}: initialized", $sim_name);
        }

        #[wasm_bindgen]
        pub fn sim_tick(dt: f32) {
            with_runner(|r| {
                r.tick(dt);
                r.sync_panel();
            });
        }

        #[wasm_bindgen]
        pub fn sim_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn sim_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn sim_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn sim_wheel(delta: f32) {
            with_runner(|r| r.push_input(InputEvent::Wheel { delta }));
        }

        #[wasm_bindgen]
        pub fn sim_resize(width: f32, height: f32) {
            with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
        }

        #[wasm_bindgen]
        pub fn sim_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            with_runner(|r| r.header_ptr())
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_sim_events_ptr() -> *const f32 {
            with_runner(|r| r.sim_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sim_events_len() -> u32 {
            with_runner(|r| r.sim_events_len())
        }

        #[wasm_bindgen]
        pub fn get_viewport_width() -> f32 {
            with_runner(|r| r.viewport_width())
        }

        #[wasm_bindgen]
        pub fn get_viewport_height() -> f32 {
            with_runner(|r| r.viewport_height())
        }

        // ---- Panel accessors ----

        #[wasm_bindgen]
        pub fn get_panel_html() -> String {
            with_runner(|r| r.panel_html())
        }

        #[wasm_bindgen]
        pub fn get_panel_visible() -> bool {
            with_runner(|r| r.panel_visible())
        }

        #[wasm_bindgen]
        pub fn get_panel_revision() -> u32 {
            with_runner(|r| r.panel_revision())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };

    ($sim_type:ty, $sim_name:literal) => {
        $crate::export_simulation!(@exports $sim_type, $sim_name, None);
    };

    ($sim_type:ty, $sim_name:literal, panel = $panel_id:literal) => {
        $crate::export_simulation!(@exports $sim_type, $sim_name, Some($panel_id));
    };
}
