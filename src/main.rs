//! Ethos Race entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use ethos_race::audio::AudioManager;
    use ethos_race::platform::assets::preload_sprites;
    use ethos_race::renderer::CanvasSurface;
    use ethos_race::{Game, Settings};

    /// Key that toggles mute once the game is running
    const MUTE_KEY: &str = "m";

    struct App {
        game: Game,
        surface: CanvasSurface,
        audio: AudioManager,
        settings: Settings,
    }

    impl App {
        fn frame(&mut self) {
            self.game.frame(&mut self.surface, &mut self.audio);
        }

        fn key_down(&mut self, key: &str) {
            if self.game.key_down(key, &mut self.audio) {
                return;
            }

            if key.eq_ignore_ascii_case(MUTE_KEY) {
                let muted = self.settings.toggle_mute();
                self.audio.apply_settings(&self.settings);
                self.settings.save();
                log::info!("Muted: {}", muted);
            }
        }

        fn key_up(&mut self, key: &str) {
            self.game.key_up(key);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Ethos Race starting...");

        if let Err(e) = boot() {
            log::error!("Startup failed: {:?}", e);
        }
    }

    fn boot() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        // Fill the window; size is fixed for the session
        let width = window.inner_width()?.as_f64().unwrap_or(800.0) as u32;
        let height = window.inner_height()?.as_f64().unwrap_or(600.0) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        log::info!("Game initialized with seed: {} ({}x{})", seed, width, height);

        preload_sprites(move |images| {
            let mut game = Game::new(seed, width as f32, height as f32);
            game.speech_bubbles = settings.speech_bubbles;

            let app = Rc::new(RefCell::new(App {
                game,
                surface: CanvasSurface::new(ctx, images, width, height),
                audio: AudioManager::new(&settings),
                settings,
            }));

            setup_input_handlers(app.clone());
            request_animation_frame(app);

            log::info!("Ethos Race running!");
        });

        Ok(())
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().key_down(&event.key());
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().key_up(&event.key());
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use ethos_race::Game;
    use ethos_race::audio::SilentAudio;
    use ethos_race::renderer::{RenderSurface, Sprite, TextStyle};
    use ethos_race::sim::{GameEvent, GameState, Rect};
    use glam::Vec2;

    /// How far above the car the autopilot starts reacting
    const LOOKAHEAD: f32 = 200.0;
    /// Extra lane clearance the autopilot keeps
    const MARGIN: f32 = 10.0;

    /// Surface that draws nothing
    struct NullSurface {
        width: f32,
        height: f32,
    }

    impl RenderSurface for NullSurface {
        fn size(&self) -> (f32, f32) {
            (self.width, self.height)
        }

        fn clear(&mut self) {}

        fn fill_rect(&mut self, _rect: Rect, _color: &str) {}

        fn draw_image(&mut self, _sprite: Sprite, _rect: Rect) {}

        fn draw_text(&mut self, _text: &str, _pos: Vec2, _style: &TextStyle) {}
    }

    /// Pick a direction away from the closest threatening obstacle.
    /// `Some(true)` steers left, `Some(false)` right, `None` holds the lane.
    fn autopilot(state: &GameState) -> Option<bool> {
        let p = state.player.rect();
        let threat = state
            .obstacles
            .iter()
            .map(|o| o.rect())
            .filter(|r| r.bottom() > p.top() - LOOKAHEAD && r.top() < p.bottom())
            .filter(|r| r.left() < p.right() + MARGIN && r.right() > p.left() - MARGIN)
            .max_by(|a, b| a.top().total_cmp(&b.top()))?;

        let player_center = p.left() + p.size.x / 2.0;
        let threat_center = threat.left() + threat.size.x / 2.0;
        let blocked_left = p.left() <= 0.0;
        let blocked_right = p.right() >= state.canvas.x;

        if (player_center < threat_center && !blocked_left) || blocked_right {
            Some(true)
        } else {
            Some(false)
        }
    }

    pub fn run(seed: u64, frames: u64, width: f32, height: f32) {
        let mut game = Game::new(seed, width, height);
        let mut surface = NullSurface { width, height };
        let mut audio = SilentAudio;

        game.key_down("Enter", &mut audio);
        game.key_up("Enter");

        let mut collisions = 0u64;
        for _ in 0..frames {
            match autopilot(&game.state) {
                Some(true) => {
                    game.key_up("ArrowRight");
                    game.key_down("ArrowLeft", &mut audio);
                }
                Some(false) => {
                    game.key_up("ArrowLeft");
                    game.key_down("ArrowRight", &mut audio);
                }
                None => {
                    game.key_up("ArrowLeft");
                    game.key_up("ArrowRight");
                }
            }

            let events = game.frame(&mut surface, &mut audio);
            collisions += events
                .iter()
                .filter(|e| matches!(e, GameEvent::Collision { .. }))
                .count() as u64;
        }

        log::info!(
            "Headless run finished: seed={} frames={} score={} collisions={} live={}",
            seed,
            frames,
            game.state.score,
            collisions,
            game.state.obstacles.len()
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Ethos Race (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    const DEFAULT_SEED: u64 = 12345;
    const DEFAULT_FRAMES: u64 = 60 * 60;

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    let frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    headless::run(seed, frames, 1280.0, 720.0);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
