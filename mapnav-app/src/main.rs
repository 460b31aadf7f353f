use anyhow::Context;
use mapnav::{
    prelude::*,
    providers::memory::{StaticPlaces, StaticPreviews, StraightLineDirections},
};

/// Headless walk-through of a search → select → route → end-route session
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            ControllerConfig::from_json_str(&json).with_context(|| format!("parsing {path}"))?
        }
        None => ControllerConfig::default(),
    };
    mapnav::logging::init(&config.log_level);

    let controller = MapControllerBuilder::new()
        .with_config(config)
        .with_places(coffee_shops())
        .with_directions(StraightLineDirections::default())
        .with_previews(
            StaticPreviews::new()
                .with_preview("sightglass", "preview://sightglass")
                .with_preview("ritual", "preview://ritual"),
        )
        .build()?;

    let events = controller.subscribe();
    controller.on("camerafit", |event| {
        if let ControllerEvent::CameraFit { fit } = event {
            log::info!("camera → {:?}", fit.target_region());
        }
    });

    let candidates = controller.submit_search_in_view("coffee").await;
    println!("found {} places", candidates.len());
    for place in &candidates {
        println!("  {} ({})", place.name, place.id);
    }

    let Some(pick) = candidates.get(1).cloned() else {
        anyhow::bail!("expected at least two coffee shops");
    };
    controller.select(Some(pick));
    // Let the background preview fetch land
    tokio::task::yield_now().await;
    println!("{}", controller.snapshot().to_json()?);

    let outcome = controller.start_route().await;
    println!("start route: {outcome:?}");
    println!("{}", controller.snapshot().to_json()?);

    let outcome = controller.end_route();
    println!("end route: {outcome:?}");
    println!("{}", controller.snapshot().to_json()?);

    controller.process_events();
    for event in events.try_iter() {
        println!("event: {}", serde_json::to_string(&event)?);
    }

    controller.shutdown();
    Ok(())
}

fn coffee_shops() -> StaticPlaces {
    StaticPlaces::new(vec![
        Place::new("blue-bottle", "Blue Bottle Coffee", LatLng::new(37.7825, -122.4075))
            .with_address("66 Mint St"),
        Place::new("sightglass", "Sightglass Coffee", LatLng::new(37.7770, -122.4085))
            .with_address("270 7th St"),
        Place::new("ritual", "Ritual Coffee Roasters", LatLng::new(37.7565, -122.4216))
            .with_address("1026 Valencia St"),
        Place::new("tartine", "Tartine Bakery", LatLng::new(37.7614, -122.4241))
            .with_address("600 Guerrero St"),
    ])
}
