// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use seamshrink::{compute_energy, energy_to_image, resize, PixelGrid};
use std::process;

extern crate clap;
extern crate image;

use clap::{App, Arg, ArgMatches};
use failure::{Error, ResultExt};
use image::{DynamicImage, GenericImageView};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn seam_count(matches: &ArgMatches, name: &str) -> Result<u32, Error> {
    let value = matches.value_of(name).unwrap_or("0");
    let count = value
        .parse::<u32>()
        .with_context(|_| format!("--{} expects a number of seams, not {:?}", name, value))?;
    Ok(count)
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    // Both are required arguments; clap has already rejected their absence.
    let input = matches.value_of("in").unwrap_or_default();
    let output = matches.value_of("out").unwrap_or_default();

    let image = image::open(input).with_context(|_| format!("unable to read {}", input))?;
    let grid = PixelGrid::from(&image.to_rgb8());
    info!(path = input, width = grid.width(), height = grid.height(), "image loaded");

    let result = if matches.is_present("energy") {
        DynamicImage::ImageLuma8(energy_to_image(&compute_energy(&grid)?))
    } else {
        let remove_width = seam_count(matches, "width")?;
        let remove_height = seam_count(matches, "height")?;
        DynamicImage::ImageRgb8(resize(&grid, remove_width, remove_height)?.into_image())
    };

    result
        .save(output)
        .with_context(|_| format!("unable to write {}", output))?;
    info!(path = output, width = result.width(), height = result.height(), "image saved");
    Ok(())
}

fn main() {
    let matches = App::new("seamcarve")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image shrinking by seam carving")
        .arg(
            Arg::with_name("in")
                .help("The image to shrink")
                .short("i")
                .long("in")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("out")
                .help("Where to write the result; the extension picks the format")
                .short("o")
                .long("out")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("width")
                .help("Number of columns to remove")
                .short("w")
                .long("width")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("height")
                .help("Number of rows to remove")
                .long("height")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("energy")
                .help("Write the energy map of the image instead of shrinking it")
                .long("energy"),
        )
        .arg(
            Arg::with_name("verbose")
                .help("Log every seam removed")
                .short("v")
                .long("verbose"),
        )
        .get_matches();

    let default_level = if matches.is_present("verbose") { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&matches) {
        let causes: Vec<String> = err.iter_chain().map(|cause| cause.to_string()).collect();
        eprintln!("seamcarve: {}", causes.join(": "));
        process::exit(1);
    }
}
