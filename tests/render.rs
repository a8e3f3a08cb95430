use sphere_tracer::{encode_ppm, render, Config};

use std::fs;
use std::process::Command;

#[test]
fn test_default_image_is_well_formed_ppm() {
    let film = render(&Config::default()).unwrap();
    let ppm = encode_ppm(&film);
    let lines: Vec<&str> = ppm.lines().collect();

    assert_eq!(&lines[..3], &["P3", "320 180", "255"]);
    assert_eq!(lines.len() - 3, 320 * 180);
    for line in &lines[3..] {
        let channels: Vec<u8> = line
            .split(' ')
            .map(|channel| channel.parse().unwrap())
            .collect();
        assert_eq!(channels.len(), 3, "bad pixel line {:?}", line);
    }
}

#[test]
fn test_cli_writes_image() {
    let path = std::env::temp_dir().join(format!("sphere_tracer_cli_{}.ppm", std::process::id()));
    let status = Command::new(env!("CARGO_BIN_EXE_sphere_tracer"))
        .args(["--width", "16", "--height", "9", "--log-level", "warn", "--output"])
        .arg(&path)
        .status()
        .unwrap();
    assert!(status.success());

    let ppm = fs::read_to_string(&path).unwrap();
    assert!(ppm.starts_with("P3\n16 9\n255\n"));
    assert_eq!(ppm.lines().count(), 3 + 16 * 9);
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_cli_fails_on_unwritable_output() {
    let output = Command::new(env!("CARGO_BIN_EXE_sphere_tracer"))
        .args(["--width", "4", "--height", "4"])
        .args(["--output", "/nonexistent-directory/image.ppm"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to write output image"), "{}", stderr);
}

#[test]
fn test_cli_reads_config_file() {
    let directory = std::env::temp_dir();
    let config_path = directory.join(format!("sphere_tracer_cfg_{}.toml", std::process::id()));
    let image_path = directory.join(format!("sphere_tracer_cfg_{}.png", std::process::id()));
    fs::write(
        &config_path,
        format!(
            "[image]\nwidth = 8\nheight = 6\noutput = {:?}\n\n[scene.sphere]\nradius = 0.25\n",
            image_path.display().to_string()
        ),
    )
    .unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_sphere_tracer"))
        .arg("--config-file")
        .arg(&config_path)
        .status()
        .unwrap();
    assert!(status.success());

    let decoded = image::open(&image_path).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (8, 6));

    fs::remove_file(&config_path).unwrap();
    fs::remove_file(&image_path).unwrap();
}
