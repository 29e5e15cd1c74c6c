//! Paddle Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use paddle_pong::config::Config;
    use paddle_pong::driver::FrameDriver;
    use paddle_pong::platform::client_to_field;
    use paddle_pong::renderer::{RenderState, SceneStyle};
    use paddle_pong::sim::SimulationState;

    /// Canvas element the game draws into
    const CANVAS_ID: &str = "pong";
    /// Canvas attribute holding an optional JSON config
    const CONFIG_ATTR: &str = "data-config";

    /// Game instance holding all state
    struct Game {
        driver: FrameDriver,
        render_state: RenderState,
        canvas: HtmlCanvasElement,
        last_time: f64,
    }

    impl Game {
        /// Record a pointer position given in DOM client coordinates
        fn pointer_at(&mut self, client_y: f32) {
            let rect = self.canvas.get_bounding_client_rect();
            let field_height = self.driver.state().field.height;
            let y = client_to_field(client_y, rect.top() as f32, rect.height() as f32, field_height);
            self.driver.pointer_mut().set(y);
        }

        /// Simulate and draw one display frame
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            self.last_time = time;

            match self.driver.frame(dt, &mut self.render_state) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    fn js_err(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Paddle Pong starting...");

        let window = web_sys::window().ok_or_else(|| js_err("no window"))?;
        let document = window.document().ok_or_else(|| js_err("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err(format!("no #{CANVAS_ID} element")))?
            .dyn_into()?;

        // Optional JSON config on the canvas: <canvas id="pong" data-config='{...}'>
        let config = Config::from_json_or_default(canvas.get_attribute(CONFIG_ATTR).as_deref());

        // Back the canvas with device pixels, field size in CSS pixels
        let dpr = window.device_pixel_ratio();
        let width = (config.field.width as f64 * dpr) as u32;
        let height = (config.field.height as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let mut state = SimulationState::new(&config, seed).map_err(js_err)?;
        state.reset_ball();
        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });
        let render_state = RenderState::create(
            &instance,
            wgpu::SurfaceTarget::Canvas(canvas.clone()),
            width,
            height,
            SceneStyle::from(&config),
        )
        .await
        .map_err(js_err)?;

        let game = Rc::new(RefCell::new(Game {
            driver: FrameDriver::new(state, config.tick_policy()),
            render_state,
            canvas: canvas.clone(),
            last_time: 0.0,
        }));

        setup_input_handlers(&canvas, game.clone())?;

        request_animation_frame(game);

        log::info!("Paddle Pong running!");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().pointer_at(event.client_y() as f32);
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    event.prevent_default();
                    game.borrow_mut().pointer_at(touch.client_y() as f32);
                }
            });
            canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, game loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Failed to start: {:?}", e);
        web_sys::console::error_1(&e);
    }
}

/// Frames simulated by the native headless runner (one minute at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const AUTOPLAY_FRAMES: u32 = 60 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use paddle_pong::config::Config;
    use paddle_pong::driver::FrameDriver;
    use paddle_pong::renderer::{HeadlessSink, SceneStyle};
    use paddle_pong::sim::SimulationState;

    env_logger::init();
    log::info!("Paddle Pong (native) starting...");
    log::info!("Native mode runs a headless autoplay session - run with `trunk serve` for the web version");

    // Optional path to a JSON config file as the first argument
    let json = std::env::args().nth(1).and_then(|path| {
        std::fs::read_to_string(&path)
            .map_err(|e| log::warn!("Could not read config {}: {}", path, e))
            .ok()
    });
    let config = Config::from_json_or_default(json.as_deref());
    match config.to_json() {
        Ok(json) => log::debug!("Config:\n{}", json),
        Err(e) => log::warn!("{}", e),
    }

    let seed = config.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    let mut state = match SimulationState::new(&config, seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to start: {}", e);
            std::process::exit(1);
        }
    };
    state.reset_ball();
    log::info!("Game initialized with seed: {}", seed);

    let mut driver = FrameDriver::new(state, config.tick_policy());
    let mut sink = HeadlessSink::new(SceneStyle::from(&config));
    let mut pointer = config.field.height / 2.0;

    for _ in 0..AUTOPLAY_FRAMES {
        // Stand-in human: drifts toward the ball, too slowly to be perfect
        pointer += (driver.state().ball.pos.y - pointer) * 0.08;
        driver.pointer_mut().set(pointer);

        let Ok(_) = driver.frame(1.0 / 60.0, &mut sink);
    }

    let state = driver.state();
    log::info!(
        "Autoplay finished after {} ticks: {} - {} (last frame {} vertices)",
        state.time_ticks,
        state.scores.left,
        state.scores.right,
        sink.last_vertex_count()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
