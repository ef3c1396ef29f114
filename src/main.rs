//! Trash Boat entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use trash_boat::Game;
    use trash_boat::Settings;
    use trash_boat::canvas::{Assets, FrameCanvas, HudText, SpriteImage, TextAlign};
    use trash_boat::platform::{Direction, InputState, Key, PerformanceClock, StartControl};
    use trash_boat::renderer::FrameRenderState;
    use trash_boat::sim::autopilot;

    /// WebGL2 downlevel limit on texture dimensions
    const MAX_CANVAS_DIM: u32 = 2048;

    /// The DOM "Start Game" button
    struct DomStartControl {
        element: web_sys::HtmlElement,
    }

    impl StartControl for DomStartControl {
        fn place(&mut self, x: f32, y: f32, width: f32, height: f32) {
            let style = self.element.style();
            let _ = style.set_property("position", "absolute");
            let _ = style.set_property("left", &format!("{}px", x));
            let _ = style.set_property("top", &format!("{}px", y));
            let _ = style.set_property("width", &format!("{}px", width));
            let _ = style.set_property("height", &format!("{}px", height));
        }

        fn show(&mut self) {
            let _ = self.element.style().set_property("display", "block");
        }

        fn hide(&mut self) {
            let _ = self.element.style().set_property("display", "none");
        }
    }

    /// Host instance holding all state
    struct Host {
        game: Game<PerformanceClock, DomStartControl>,
        canvas: FrameCanvas,
        render_state: Option<FrameRenderState>,
        input: InputState,
        /// Autopilot steers instead of the player
        idle_mode: bool,
        last_frame: f64,
        frame_interval: f64,
        /// Canvas offset on the page, for touch coordinates
        canvas_el: HtmlCanvasElement,
    }

    impl Host {
        fn update(&mut self, time: f64) {
            if time - self.last_frame < self.frame_interval {
                return;
            }
            self.last_frame = time;

            let input = if self.idle_mode {
                autopilot::steer(&self.game.state)
            } else {
                self.input.sample()
            };
            if !self.game.frame(&input, &mut self.canvas) {
                return;
            }

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(self.canvas.frame()) {
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
            update_hud(self.canvas.hud());
        }

        /// Touch list in canvas pixels
        fn touch_positions(&self, event: &TouchEvent) -> Vec<Vec2> {
            let rect = self.canvas_el.get_bounding_client_rect();
            let touches = event.touches();
            (0..touches.length())
                .filter_map(|i| touches.get(i))
                .map(|t| {
                    Vec2::new(
                        t.client_x() as f32 - rect.left() as f32,
                        t.client_y() as f32 - rect.top() as f32,
                    )
                })
                .collect()
        }
    }

    /// Lay out queued HUD text as positioned spans
    fn update_hud(lines: &[HudText]) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(hud) = document.get_element_by_id("hud") else {
            return;
        };
        let html: String = lines
            .iter()
            .map(|line| {
                let shift = match line.align {
                    TextAlign::Left => "translate(0, -50%)",
                    TextAlign::Center => "translate(-50%, -50%)",
                };
                format!(
                    "<span style=\"position:absolute;left:{}px;top:{}px;font-size:{}px;transform:{};color:#fff;white-space:nowrap\">{}</span>",
                    line.pos.x, line.pos.y, line.size, shift, line.text
                )
            })
            .collect();
        hud.set_inner_html(&html);
    }

    async fn fetch_bytes(url: &str) -> Result<Vec<u8>, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let response = wasm_bindgen_futures::JsFuture::from(window.fetch_with_str(url)).await?;
        let response: web_sys::Response = response.dyn_into()?;
        if !response.ok() {
            return Err(JsValue::from_str(&format!("HTTP {}", response.status())));
        }
        let buffer = wasm_bindgen_futures::JsFuture::from(response.array_buffer()?).await?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }

    async fn load_sprite(url: &str, fallback: SpriteImage) -> SpriteImage {
        let decoded = match fetch_bytes(url).await {
            Ok(bytes) => SpriteImage::from_png(&bytes).map_err(|e| e.to_string()),
            Err(e) => Err(format!("{:?}", e)),
        };
        match decoded {
            Ok(sprite) => {
                log::info!("Loaded {} ({}x{})", url, sprite.width, sprite.height);
                sprite
            }
            Err(e) => {
                log::warn!("Using placeholder for {}: {}", url, e);
                fallback
            }
        }
    }

    async fn load_assets() -> Assets {
        let placeholder = Assets::placeholder();
        Assets {
            boat: load_sprite("assets/boat.png", placeholder.boat).await,
            trash: load_sprite("assets/trash.png", placeholder.trash).await,
            game_over: load_sprite("assets/info.png", placeholder.game_over).await,
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Trash Boat starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // One canvas pixel per CSS pixel
        let dim = |v: Result<JsValue, JsValue>| {
            v.ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(800.0)
                .clamp(1.0, MAX_CANVAS_DIM as f64) as u32
        };
        let width = dim(window.inner_width());
        let height = dim(window.inner_height());
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let assets = load_assets().await;

        let button: web_sys::HtmlElement = document
            .create_element("button")
            .expect("create button")
            .dyn_into()
            .expect("not an element");
        button.set_text_content(Some("Start Game"));
        if let Some(body) = document.body() {
            let _ = body.append_child(&button);
        }

        let clock = PerformanceClock::new().expect("no performance clock");
        let seed = js_sys::Date::now() as u64;
        let game = match Game::new(
            &settings,
            width,
            height,
            seed,
            clock,
            DomStartControl {
                element: button.clone(),
            },
        ) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Cannot start: {}", e);
                return;
            }
        };

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = FrameRenderState::new(surface, &adapter, width, height).await;

        let host = Rc::new(RefCell::new(Host {
            game,
            canvas: FrameCanvas::new(width, height, assets),
            render_state: Some(render_state),
            input: InputState::default(),
            idle_mode: false,
            last_frame: 0.0,
            frame_interval: settings.frame_interval_ms(),
            canvas_el: canvas.clone(),
        }));

        setup_start_button(&button, host.clone());
        setup_input_handlers(&canvas, host.clone());

        request_animation_frame(host);

        log::info!("Trash Boat running!");
    }

    fn setup_start_button(button: &web_sys::HtmlElement, host: Rc<RefCell<Host>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            host.borrow_mut().game.start_pressed();
        });
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, host: Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();

        // Key down: held arrows plus discrete presses
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut h = host.borrow_mut();
                let key = event.key();
                if let Some(dir) = Direction::from_dom(&key) {
                    event.prevent_default();
                    h.input.set_held(dir, true);
                    return;
                }
                match key.as_str() {
                    "i" | "I" => {
                        h.idle_mode = !h.idle_mode;
                        log::info!("Idle mode: {}", h.idle_mode);
                    }
                    _ => {
                        let key = Key::from_dom(&key);
                        if key == Key::Space {
                            event.prevent_default();
                        }
                        h.game.key_pressed(key);
                    }
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(dir) = Direction::from_dom(&event.key()) {
                    host.borrow_mut().input.set_held(dir, false);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start/move/end all refresh the active touch list
        for name in ["touchstart", "touchmove", "touchend", "touchcancel"] {
            let host = host.clone();
            let is_move = name == "touchmove";
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let mut h = host.borrow_mut();
                if is_move && h.game.suppress_touch_scroll() {
                    event.prevent_default();
                }
                let touches = h.touch_positions(&event);
                h.input.touches = touches;
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(host, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>, time: f64) {
        host.borrow_mut().update(time);
        request_animation_frame(host);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Trash Boat (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    let mut args = std::env::args().skip(1);
    let width = args.next().and_then(|a| a.parse().ok()).unwrap_or(160);
    let height = args.next().and_then(|a| a.parse().ok()).unwrap_or(120);

    match headless_round(width, height) {
        Ok(score) => println!("Autopilot round finished with score {}", score),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play one autopiloted round on a simulated clock
#[cfg(not(target_arch = "wasm32"))]
fn headless_round(width: u32, height: u32) -> Result<u32, trash_boat::ConfigError> {
    use trash_boat::Game;
    use trash_boat::canvas::{Assets, FrameCanvas};
    use trash_boat::platform::{HeadlessStartControl, Key, ManualClock};
    use trash_boat::sim::autopilot;

    let settings = trash_boat::Settings::load();
    let clock = ManualClock::new(0.0);
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let mut game = Game::new(
        &settings,
        width,
        height,
        seed,
        clock.clone(),
        HeadlessStartControl::default(),
    )?;
    let mut canvas = FrameCanvas::new(width, height, Assets::placeholder());

    game.key_pressed(Key::Space);
    let step = settings.frame_interval_ms();
    let mut frames = 0u64;
    while game.is_looping() {
        let input = autopilot::steer(&game.state);
        game.frame(&input, &mut canvas);
        clock.advance(step);
        frames += 1;
    }

    log::info!("Round over after {} frames", frames);
    for line in canvas.hud() {
        log::info!("HUD: {}", line.text);
    }
    Ok(game.state.score)
}
