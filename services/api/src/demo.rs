use chrono::{TimeZone, Utc};
use clap::Args;
use inwheel::accessibility::AccessibilityStatus;
use inwheel::config::AppConfig;
use inwheel::error::AppError;
use inwheel::ingest::PlaceRow;
use inwheel::places::{PlaceAccessibilityReport, PlaceCategory, PlaceEvaluator, StatusTally};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::infra::load_place_rows;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// JSON file holding a place row or an array of rows
    pub(crate) file: PathBuf,
    /// Print full reports as JSON instead of one summary per place
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the OSM tag derivation portion of the demo
    #[arg(long)]
    pub(crate) skip_osm: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let evaluator = PlaceEvaluator::new(config.evaluator);
    let places = load_place_rows(&args.file)?;
    let reports: Vec<_> = places.iter().map(|place| evaluator.evaluate(place)).collect();

    if args.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => eprintln!("could not render reports: {err}"),
        }
        return Ok(());
    }

    render_reports(&reports);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let evaluator = PlaceEvaluator::default();

    println!("Accessibility demo");
    let reports: Vec<_> = sample_places()
        .iter()
        .map(|place| evaluator.evaluate(place))
        .collect();
    render_reports(&reports);

    if args.skip_osm {
        return Ok(());
    }

    println!("\nFacts derived from OSM tags");
    let tags: BTreeMap<String, String> = [
        ("amenity", "cafe"),
        ("entrance:step_count", "1"),
        ("ramp:wheelchair", "yes"),
        ("door:width", "82 cm"),
        ("automatic_door", "button"),
        ("building:levels", "1"),
        ("wheelchair", "limited"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect();
    let evaluation = evaluator.evaluate_tags(&tags);
    for (key, value) in &tags {
        println!("  {key}={value}");
    }
    println!("- overall: {}", evaluation.overall);
    println!("- entrance: {}", label(evaluation.entrance));
    println!("- floor: {}", label(evaluation.floor));
    println!("- wheelchair tag: {}", label(evaluation.tagged));

    Ok(())
}

fn render_reports(reports: &[PlaceAccessibilityReport]) {
    for report in reports {
        println!("- {}", report.summary());
        if report.has_user_updates {
            println!("  includes user-submitted facts");
        }
        for note in &report.notes {
            println!("  note: {note}");
        }
    }

    let tally: StatusTally = reports.iter().map(|report| report.overall).collect();
    println!("\n{} places evaluated", tally.total());
    for status in AccessibilityStatus::ALL.iter().rev() {
        println!("  {}: {}", status, tally.count(*status));
    }
}

fn label(status: Option<AccessibilityStatus>) -> &'static str {
    status.map_or("no information", AccessibilityStatus::label)
}

fn sample_place(
    id: &str,
    name: &str,
    category: PlaceCategory,
    source: Value,
    user: Option<Value>,
) -> PlaceRow {
    let osm_update = Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).single();
    let user_update = user
        .as_ref()
        .and_then(|_| Utc.with_ymd_and_hms(2024, 5, 14, 16, 30, 0).single());
    PlaceRow {
        id: id.to_string(),
        osm_id: None,
        name: name.to_string(),
        category,
        lat: 60.1699,
        lon: 24.9384,
        contact: None,
        source_accessibility: Some(source),
        user_accessibility: user,
        last_osm_update: osm_update,
        last_user_update: user_update,
        created_at: osm_update,
    }
}

pub(crate) fn sample_places() -> Vec<PlaceRow> {
    vec![
        sample_place(
            "demo-1",
            "Kahvila Sumu",
            PlaceCategory::Cafe,
            json!({
                "entrance": {
                    "steps": {"has_stairs": false},
                    "door": {"door_opening": "fully_accessible", "automatic_door": true}
                },
                "restroom": {
                    "door_width": true,
                    "room_spaciousness": "fully_accessible",
                    "grab_rails": "fully_accessible",
                    "toilet_seat": "fully_accessible",
                    "sink": "fully_accessible",
                    "has_emergency_alarm": true
                }
            }),
            None,
        ),
        sample_place(
            "demo-2",
            "Ravintola Kivi",
            PlaceCategory::Restaurant,
            json!({
                "entrance": {
                    "steps": {"has_stairs": true, "step_count": 3},
                    "door": {"door_opening": "fully_accessible", "automatic_door": false}
                }
            }),
            Some(json!({"entrance": {"steps": {"ramp": "limited_accessibility"}}})),
        ),
        sample_place(
            "demo-3",
            "Apteekki Keskusta",
            PlaceCategory::Pharmacy,
            json!({
                "entrance": {
                    "steps": {"has_stairs": true, "step_count": 5, "elevator": "not_accessible"},
                    "door": {"door_opening": "limited_accessibility"}
                }
            }),
            None,
        ),
        sample_place(
            "demo-4",
            "Kamppi P-halli",
            PlaceCategory::Parking,
            json!({
                "entrance": {
                    "steps": {"has_stairs": false},
                    "door": {"door_opening": "fully_accessible", "automatic_door": true}
                },
                "parking": {
                    "has_accessible_spots": true,
                    "spot_count": 6,
                    "parking_type": "underground",
                    "has_smooth_surface": true,
                    "has_elevator": true,
                    "elevator": {
                        "is_available": true,
                        "is_spacious_enough": true,
                        "has_braille_buttons": true,
                        "has_audio_announcements": false
                    }
                }
            }),
            None,
        ),
        sample_place(
            "demo-5",
            "Kirjasto Oodi",
            PlaceCategory::Library,
            json!({
                "entrance": {
                    "steps": {"has_stairs": false},
                    "door": {"door_opening": "fully_accessible", "automatic_door": true}
                },
                "floor": {"level": 2, "has_elevator": true}
            }),
            None,
        ),
    ]
}
