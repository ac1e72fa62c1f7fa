use macroquad::prelude::*;

use client::{
    config::{self, Config},
    run::App,
};

fn window_conf() -> Conf {
    Conf {
        window_title: config::WINDOW_TITLE.to_owned(),
        window_width: config::WINDOW_WIDTH,
        window_height: config::WINDOW_HEIGHT,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let mut app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };

    app.run().await;
}
