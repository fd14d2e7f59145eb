extern crate plotters;
use plotters::prelude::*;

extern crate serp;
use serp::{serp, smerp, Vec2};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // easing curves for a few k, all from 0 to 1
    let ks = [0.0f32, 0.25, 0.5, 0.75];
    let colors = [BLACK, BLUE, GREEN, RED];

    // control points of the curve drawn with the general evaluator
    let cpoints = [
        Vec2::new(0.0, 0.0),
        Vec2::new(0.1, 0.9),
        Vec2::new(0.5, -0.3),
        Vec2::new(0.9, 1.3),
        Vec2::new(1.0, 1.0),
    ];

    let nsteps: usize = 1000;

    let root = BitMapBackend::new("smerp_easing.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("smerp(0, 1, k, t) and a quartic serp", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-0.1f32..1.1f32, -0.4f32..1.4f32)?;

    chart.configure_mesh().draw()?;

    for (&k, &color) in ks.iter().zip(colors.iter()) {
        let graph: Vec<(f32, f32)> = (0..=nsteps)
            .map(|t| {
                let t = t as f32 / nsteps as f32;
                (t, smerp(0.0f32, 1.0, k, t))
            })
            .collect();
        chart
            .draw_series(LineSeries::new(graph, &color))?
            .label(format!("k = {}", k))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    let mut serp_graph: Vec<(f32, f32)> = Vec::with_capacity(nsteps + 1);
    for t in 0..=nsteps {
        let t = t as f32 / nsteps as f32;
        let p = serp(&cpoints, t)?;
        serp_graph.push((p.x(), p.y()));
    }
    chart
        .draw_series(LineSeries::new(serp_graph, MAGENTA.stroke_width(2)))?
        .label("serp(points, t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], MAGENTA));

    chart.draw_series(PointSeries::of_element(
        cpoints.iter().map(|p| (p.x(), p.y())),
        4,
        &MAGENTA,
        &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
    ))?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
