//! Tilt Hole entry point
//!
//! On web: wires the canvas, keyboard, buttons and sliders to a `Session` and
//! runs the animation-frame loop. Natively: prints the hole layout for a seed.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlInputElement};

    use tilt_hole::consts::*;
    use tilt_hole::persistence::LocalStore;
    use tilt_hole::platform::{FrameLoop, apply_key};
    use tilt_hole::renderer::{RenderState, build_scene};
    use tilt_hole::sim::RoundPhase;
    use tilt_hole::Session;

    /// Game instance holding all state
    struct Game {
        session: Session<LocalStore>,
        render_state: Option<RenderState>,
        frames: FrameLoop,
    }

    impl Game {
        fn new() -> Self {
            Self {
                session: Session::open(LocalStore::open()),
                render_state: None,
                frames: FrameLoop::new(),
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = build_scene(&self.session.state);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }

    fn set_text(id: &str, text: &str) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            el.set_text_content(Some(text));
        }
    }

    /// Show or hide the round-over message
    fn show_message(text: Option<&str>) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id("message")) {
            el.set_text_content(text);
            let class = if text.is_some() { "" } else { "hidden" };
            let _ = el.set_attribute("class", class);
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Tilt Hole starting...");

        let Some(document) = document() else {
            log::error!("No document");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("gameCanvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #gameCanvas element");
            return;
        };

        let width = CANVAS_WIDTH as u32;
        let height = CANVAS_HEIGHT as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let game = Rc::new(RefCell::new(Game::new()));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {}", e);
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => {
                log::error!("Failed to create device: {}", e);
                return;
            }
        }

        setup_input_handlers(game.clone());
        setup_change_seed_button(game.clone());
        setup_sliders(game.clone());
        show_message(None);

        request_frame(&game);

        log::info!("Tilt Hole running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(document) = document() else {
            return;
        };

        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                apply_key(&mut g.session.state.input, &event.key(), pressed);
            });
            let _ = document
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_change_seed_button(game: Rc<RefCell<Game>>) {
        let Some(btn) = document().and_then(|d| d.get_element_by_id("changeSeedButton")) else {
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let mut g = game.borrow_mut();
            g.session.change_seed();
            g.render();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_sliders(game: Rc<RefCell<Game>>) {
        let Some(document) = document() else {
            return;
        };

        // Restore stored positions and labels
        {
            let g = game.borrow();
            let settings = g.session.settings();
            let sliders = [
                ("barSpeed", settings.bar_speed),
                ("ballAcceleration", settings.ball_acceleration),
            ];
            for (id, raw) in sliders {
                if let (Some(raw), Some(slider)) = (
                    raw,
                    document
                        .get_element_by_id(id)
                        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok()),
                ) {
                    slider.set_value(&raw.to_string());
                }
            }
            set_text("barSpeedValue", settings.bar_speed_label());
            set_text("ballAccelerationValue", settings.ball_acceleration_label());
        }

        type Apply = fn(&mut Session<LocalStore>, u32) -> &'static str;
        let sliders: [(&'static str, &'static str, Apply); 2] = [
            ("barSpeed", "barSpeedValue", Session::set_bar_speed),
            (
                "ballAcceleration",
                "ballAccelerationValue",
                Session::set_ball_acceleration,
            ),
        ];

        for (id, label_id, apply) in sliders {
            let Some(slider) = document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            else {
                continue;
            };

            let game = game.clone();
            let input = slider.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let value = input.value();
                match value.parse::<u32>() {
                    Ok(raw) => {
                        let label = apply(&mut game.borrow_mut().session, raw);
                        set_text(label_id, label);
                    }
                    Err(_) => log::warn!("Ignoring slider {} value {:?}", id, value),
                }
            });
            let _ = slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Request the next animation frame unless one is already pending
    fn request_frame(game: &Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let handle = game.clone();
        game.borrow_mut().frames.request_frame(move || {
            let closure = Closure::once(move |_time: f64| {
                game_loop(handle);
            });
            let id = window
                .request_animation_frame(closure.as_ref().unchecked_ref())
                .ok();
            closure.forget();
            id
        });
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let phase = {
            let mut g = game.borrow_mut();
            g.frames.frame_fired();
            let phase = g.session.step();
            g.render();
            phase
        };

        match phase {
            RoundPhase::Running => request_frame(&game),
            RoundPhase::Won => round_over(&game, "nice i guess"),
            RoundPhase::Lost => round_over(&game, "u suck"),
        }
    }

    /// Stop the loop, show the verdict and reset after a short pause
    fn round_over(game: &Rc<RefCell<Game>>, message: &str) {
        show_message(Some(message));

        let Some(window) = web_sys::window() else {
            return;
        };
        let handle = game.clone();
        game.borrow_mut().frames.arm_reset(move || {
            let closure = Closure::once(move || {
                handle.borrow_mut().frames.reset_fired();
                restart(&handle);
            });
            let id = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    RESET_DELAY_MS,
                )
                .ok();
            closure.forget();
            id
        });
    }

    /// Cancel anything pending, reset the round and start a fresh loop
    fn restart(game: &Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            let (frame, reset) = g.frames.cancel_all();
            if let Some(window) = web_sys::window() {
                if let Some(id) = frame {
                    let _ = window.cancel_animation_frame(id);
                }
                if let Some(id) = reset {
                    window.clear_timeout_with_handle(id);
                }
            }
            g.session.reset();
        }

        show_message(None);
        request_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use tilt_hole::settings::{fresh_seed, parse_seed};
    use tilt_hole::sim::HoleLayout;

    env_logger::init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => match parse_seed(&arg) {
            Some(seed) => seed,
            None => {
                log::error!("Not a seed: {:?}", arg);
                std::process::exit(2);
            }
        },
        None => {
            let seed = fresh_seed();
            log::info!("No seed given, using {}", seed);
            seed
        }
    };

    let layout = HoleLayout::new(seed);
    match serde_json::to_string_pretty(&layout) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Failed to serialize layout: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
