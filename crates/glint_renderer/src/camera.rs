//! Progressive camera sampler.
//!
//! The camera owns a grid of primary rays and a parallel grid of cached
//! samples. The first tick after a reset traces the whole coarse grid; every
//! later tick traces one column. Once all columns are done the next tick
//! doubles the grid in both directions, keeping every cached sample at its
//! even/even position, until the pixel footprint reaches 1.

use std::f64::consts::PI;

use glint_core::{Light, Surface, Viewpoint};
use glint_math::{Color, DVec3, Orientation, Ray};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::grid::Grid;
use crate::trace::{TraceConfig, Tracer};

/// Sampler settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Columns of the coarse grid
    pub initial_columns: usize,
    /// Rows of the coarse grid
    pub initial_rows: usize,
    /// Output pixels covered by one coarse cell, per side
    pub initial_footprint: u32,
    /// Horizontal field of view in radians
    pub field_of_view: f64,
    /// Radians turned per turn/look command
    pub angular_velocity: f64,
    /// Distance moved per movement command
    pub move_speed: f64,
    /// Trace cells on the rayon thread pool
    pub parallel: bool,
    pub trace: TraceConfig,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            initial_columns: 16,
            initial_rows: 9,
            initial_footprint: 64,
            field_of_view: PI * 0.4,
            angular_velocity: 0.05,
            move_speed: 1.0,
            parallel: true,
            trace: TraceConfig::default(),
        }
    }
}

impl CameraConfig {
    /// Set the coarse grid size.
    pub fn with_resolution(mut self, columns: usize, rows: usize) -> Self {
        self.initial_columns = columns;
        self.initial_rows = rows;
        self
    }

    /// Set the coarse pixel footprint.
    pub fn with_footprint(mut self, footprint: u32) -> Self {
        self.initial_footprint = footprint;
        self
    }

    pub fn with_field_of_view(mut self, radians: f64) -> Self {
        self.field_of_view = radians;
        self
    }

    /// Set turn rate and movement speed.
    pub fn with_velocity(mut self, angular: f64, speed: f64) -> Self {
        self.angular_velocity = angular;
        self.move_speed = speed;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_trace(mut self, trace: TraceConfig) -> Self {
        self.trace = trace;
        self
    }

    /// Width and height of the rasterised output in pixels.
    pub fn image_size(&self) -> (u32, u32) {
        let footprint = self.initial_footprint.max(1);
        let scale = |cells: usize| u32::try_from(cells).unwrap_or(u32::MAX).saturating_mul(footprint);
        (scale(self.initial_columns), scale(self.initial_rows))
    }
}

/// Where the sampler is in its refinement schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerState {
    /// Still tracing at `footprint`; `cursor` is the next column.
    Active { footprint: u32, cursor: usize },
    /// Every cell of the finest grid is traced.
    Complete,
}

/// Refinement progress, for progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Refinement passes done since the last reset
    pub level: u32,
    /// Passes needed to reach a footprint of 1
    pub levels: u32,
    pub cursor: usize,
    pub columns: usize,
    pub footprint: u32,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Cells traced this tick
    pub traced: usize,
    /// The grid was doubled at the end of the tick
    pub refined: bool,
    /// The sampler reached `Complete` this tick
    pub completed: bool,
    /// The command moved the camera and discarded all samples
    pub reset: bool,
}

/// Read-only view of the cached samples for rasterising.
///
/// Unset cells have not been traced yet and must be skipped, not drawn black.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a> {
    pub cells: &'a Grid<Option<Color>>,
    pub footprint: u32,
}

/// The observer and its progressive sample cache.
#[derive(Debug, Clone)]
pub struct Camera {
    config: CameraConfig,
    position: DVec3,
    orientation: Orientation,
    rays: Grid<Ray>,
    samples: Grid<Option<Color>>,
    footprint: u32,
    cursor: usize,
    complete: bool,
}

impl Camera {
    pub fn new(config: CameraConfig, viewpoint: Viewpoint) -> Self {
        let mut camera = Self {
            config,
            position: viewpoint.position,
            orientation: viewpoint.orientation,
            rays: Grid::new_with(0, 0, |_, _| Ray::default()),
            samples: Grid::new_with(0, 0, |_, _| None),
            footprint: config.initial_footprint.max(1),
            cursor: 0,
            complete: false,
        };
        camera.reset();
        camera
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Current pose, for the overhead map.
    pub fn pose(&self) -> Viewpoint {
        Viewpoint {
            position: self.position,
            orientation: self.orientation,
        }
    }

    /// Move the camera and discard all samples.
    pub fn set_pose(&mut self, position: DVec3, yaw: f64, pitch: f64) {
        self.position = position;
        self.orientation = Orientation::new(yaw, pitch);
        self.reset();
    }

    pub fn state(&self) -> SamplerState {
        if self.complete {
            SamplerState::Complete
        } else {
            SamplerState::Active {
                footprint: self.footprint,
                cursor: self.cursor,
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn footprint(&self) -> u32 {
        self.footprint
    }

    /// Current grid size as `(columns, rows)`.
    pub fn resolution(&self) -> (usize, usize) {
        (self.samples.columns(), self.samples.rows())
    }

    pub fn progress(&self) -> Progress {
        let initial = self.config.initial_footprint.max(1);
        Progress {
            level: (initial / self.footprint).ilog2(),
            levels: initial.ilog2(),
            cursor: self.cursor.min(self.samples.columns()),
            columns: self.samples.columns(),
            footprint: self.footprint,
        }
    }

    pub fn sample_grid(&self) -> GridView<'_> {
        GridView {
            cells: &self.samples,
            footprint: self.footprint,
        }
    }

    /// Primary ray of cell `(column, row)` in the current grid.
    pub fn ray(&self, column: usize, row: usize) -> Option<&Ray> {
        self.rays.get(column, row)
    }

    /// Apply one input command and do one unit of tracing.
    pub fn tick(&mut self, surfaces: &[Surface], lights: &[Light], command: Command) -> TickReport {
        let reset = self.apply_command(command);
        TickReport {
            reset,
            ..self.step(surfaces, lights)
        }
    }

    /// Update the pose from `command`. Returns true if the camera moved, in
    /// which case all samples were discarded.
    pub fn apply_command(&mut self, command: Command) -> bool {
        if !command.moves() {
            return false;
        }
        let turn = self.config.angular_velocity;
        let speed = self.config.move_speed;

        match command {
            Command::TurnLeft => self.orientation.yaw += turn,
            Command::TurnRight => self.orientation.yaw -= turn,
            Command::LookUp => self.orientation.pitch -= turn,
            Command::LookDown => self.orientation.pitch += turn,
            Command::Forward => self.position += self.orientation.forward() * speed,
            Command::Back => self.position -= self.orientation.forward() * speed,
            Command::StrafeLeft => self.position -= self.orientation.right() * speed,
            Command::StrafeRight => self.position += self.orientation.right() * speed,
            Command::Ascend => self.position.z += speed,
            Command::Descend => self.position.z -= speed,
            Command::None => {}
        }

        self.orientation = self.orientation.wrapped();
        self.reset();
        true
    }

    /// Trace one unit of work: the whole grid on the coarse pass, otherwise
    /// the column under the cursor.
    ///
    /// A finished pass stays visible through [`Camera::sample_grid`] until the
    /// next step, which refines before tracing. The last pass at footprint 1
    /// (or an empty grid) completes immediately.
    pub fn step(&mut self, surfaces: &[Surface], lights: &[Light]) -> TickReport {
        let mut report = TickReport::default();
        if self.complete {
            return report;
        }

        if self.pass_done() {
            self.refine();
            report.refined = true;
        }

        let tracer = Tracer::with_config(surfaces, lights, self.config.trace);
        let parallel = self.config.parallel;

        if self.footprint == self.config.initial_footprint.max(1) {
            report.traced = trace_cells(&tracer, self.rays.cells(), self.samples.cells_mut(), parallel);
            self.cursor = self.samples.columns();
        } else {
            let column = self.cursor;
            report.traced = trace_cells(
                &tracer,
                self.rays.column(column),
                self.samples.column_mut(column),
                parallel,
            );
            self.cursor += 1;
        }
        log::trace!(
            "Traced {} cells (footprint {}, column {}/{})",
            report.traced,
            self.footprint,
            self.cursor,
            self.samples.columns()
        );

        if self.pass_done() && (self.footprint <= 1 || self.samples.cells().is_empty()) {
            self.complete = true;
            report.completed = true;
            let (columns, rows) = self.resolution();
            log::info!("Render settled at {}x{}", columns, rows);
        }

        report
    }

    fn pass_done(&self) -> bool {
        self.cursor >= self.samples.columns()
    }

    /// Double the grid in both directions and halve the footprint.
    ///
    /// Samples and rays of the old grid move to even/even cells; the new
    /// cells get fresh rays and no sample.
    pub fn refine(&mut self) {
        if self.footprint <= 1 {
            return;
        }

        let columns = self.rays.columns() * 2;
        let rows = self.rays.rows() * 2;
        let interval = self.config.field_of_view / columns as f64;
        let rays = Grid::new_with(columns, rows, |column, row| {
            if column % 2 == 0 && row % 2 == 0 {
                if let Some(ray) = self.rays.get(column / 2, row / 2) {
                    return *ray;
                }
            }
            self.cell_ray(column, row, columns, rows, interval)
        });

        self.rays = rays;
        self.samples = self.samples.refined(None);
        self.footprint = (self.footprint / 2).max(1);
        self.cursor = 0;
        log::debug!(
            "Refined to {}x{} (footprint {})",
            columns,
            rows,
            self.footprint
        );
    }

    /// Rebuild the coarse grid at the current pose with no samples.
    pub fn reset(&mut self) {
        let columns = self.config.initial_columns;
        let rows = self.config.initial_rows;
        let interval = self.config.field_of_view / columns as f64;

        self.rays = Grid::new_with(columns, rows, |column, row| {
            self.cell_ray(column, row, columns, rows, interval)
        });
        self.samples = Grid::new_with(columns, rows, |_, _| None);
        self.footprint = self.config.initial_footprint.max(1);
        self.cursor = 0;
        self.complete = false;
        log::debug!(
            "Reset sampler at ({:.2}, {:.2}, {:.2})",
            self.position.x,
            self.position.y,
            self.position.z
        );
    }

    fn cell_ray(&self, column: usize, row: usize, columns: usize, rows: usize, interval: f64) -> Ray {
        let fov = self.config.field_of_view;
        let theta = fov / 2.0 - (column as f64 / columns as f64) * fov;
        let phi = -(rows as f64 * interval) / 2.0 + row as f64 * interval;
        let local = DVec3::new(
            phi.cos() * theta.cos(),
            theta.sin(),
            -phi.sin() * theta.cos(),
        );
        Ray::new(self.position, self.orientation.to_world(local))
    }
}

/// Trace every unset cell of `cells`, each paired with its ray.
fn trace_cells(tracer: &Tracer<'_>, rays: &[Ray], cells: &mut [Option<Color>], parallel: bool) -> usize {
    let trace_cell = |(ray, cell): (&Ray, &mut Option<Color>)| -> usize {
        if cell.is_some() {
            return 0;
        }
        *cell = Some(tracer.trace(ray));
        1
    };

    if parallel {
        rays.par_iter().zip(cells.par_iter_mut()).map(trace_cell).sum()
    } else {
        rays.iter().zip(cells.iter_mut()).map(trace_cell).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::Material;
    use std::f64::consts::{FRAC_PI_2, TAU};

    fn small_config() -> CameraConfig {
        CameraConfig::default().with_resolution(4, 3).with_footprint(4)
    }

    fn floor_scene() -> (Vec<Surface>, Vec<Light>) {
        let floor = Surface::new(
            DVec3::new(-100.0, -100.0, 0.0),
            DVec3::new(400.0, 0.0, 0.0),
            DVec3::new(0.0, 400.0, 0.0),
            Material::diffuse(Color::new(0.8, 0.6, 0.4)),
        );
        let light = Light::point(1000.0, DVec3::new(10.0, 0.0, 10.0));
        (vec![floor], vec![light])
    }

    fn looking_down() -> Viewpoint {
        Viewpoint::new(DVec3::new(0.0, 0.0, 5.0), 0.0, FRAC_PI_2 + 0.6)
    }

    fn is_traced(camera: &Camera, column: usize, row: usize) -> bool {
        matches!(camera.sample_grid().cells.get(column, row), Some(Some(_)))
    }

    #[test]
    fn test_default_config() {
        let config = CameraConfig::default();
        assert_eq!(config.initial_columns, 16);
        assert_eq!(config.initial_rows, 9);
        assert_eq!(config.initial_footprint, 64);
        assert!((config.field_of_view - 0.4 * PI).abs() < 1e-15);
        assert_eq!(config.trace.max_bounces, 4);
        assert_eq!(config.image_size(), (1024, 576));
    }

    #[test]
    fn test_image_size_saturates() {
        let config = CameraConfig::default()
            .with_resolution(usize::MAX, 3)
            .with_footprint(u32::MAX);
        assert_eq!(config.image_size(), (u32::MAX, u32::MAX));

        let config = CameraConfig::default().with_resolution(70_000, 2).with_footprint(70_000);
        assert_eq!(config.image_size(), (u32::MAX, 140_000));
    }

    #[test]
    fn test_new_camera_is_unsampled() {
        let camera = Camera::new(CameraConfig::default(), Viewpoint::default());
        assert_eq!(camera.resolution(), (16, 9));
        assert_eq!(
            camera.state(),
            SamplerState::Active {
                footprint: 64,
                cursor: 0
            }
        );
        assert!(camera.sample_grid().cells.iter().all(|(_, _, c)| c.is_none()));
    }

    #[test]
    fn test_ray_fan_orientation() {
        let camera = Camera::new(small_config(), Viewpoint::default());
        let first = camera.ray(0, 0).unwrap();
        let last = camera.ray(3, 2).unwrap();

        // First column looks left, first row looks up
        assert!(first.direction.y > 0.0);
        assert!(first.direction.z > 0.0);
        assert!(last.direction.y < 0.0);
        assert!(last.direction.z < 0.0);
        assert!(first.direction.x > 0.0);
        assert_eq!(first.origin, DVec3::ZERO);
    }

    #[test]
    fn test_coarse_pass_is_shown_before_refining() {
        let (surfaces, lights) = floor_scene();
        let mut camera = Camera::new(small_config(), looking_down());

        let report = camera.tick(&surfaces, &lights, Command::None);
        assert_eq!(report.traced, 12);
        assert!(!report.refined);
        assert!(!report.reset);
        assert_eq!(camera.resolution(), (4, 3));
        assert_eq!(camera.sample_grid().footprint, 4);
        assert!(camera.sample_grid().cells.iter().all(|(_, _, c)| c.is_some()));

        let report = camera.tick(&surfaces, &lights, Command::None);
        assert!(report.refined);
        assert_eq!(report.traced, 3);
        assert_eq!(camera.resolution(), (8, 6));
        assert_eq!(camera.sample_grid().footprint, 2);
        for (c, r, cell) in camera.sample_grid().cells.iter() {
            assert_eq!(cell.is_some(), c == 0 || (c % 2 == 0 && r % 2 == 0));
        }
    }

    #[test]
    fn test_finished_pass_keeps_its_footprint() {
        let (surfaces, lights) = floor_scene();
        let mut camera = Camera::new(small_config(), looking_down());
        camera.tick(&surfaces, &lights, Command::None);
        for _ in 0..8 {
            camera.tick(&surfaces, &lights, Command::None);
        }

        assert_eq!(
            camera.state(),
            SamplerState::Active {
                footprint: 2,
                cursor: 8
            }
        );
        assert_eq!(camera.sample_grid().footprint, 2);
        assert!(camera.sample_grid().cells.iter().all(|(_, _, c)| c.is_some()));
    }

    #[test]
    fn test_refine_preserves_samples() {
        let (surfaces, lights) = floor_scene();
        let mut camera = Camera::new(small_config(), looking_down());
        camera.tick(&surfaces, &lights, Command::None);
        camera.tick(&surfaces, &lights, Command::None);

        let before = camera.sample_grid().cells.clone();
        let old_rays: Vec<Ray> = (0..8)
            .flat_map(|c| (0..6).map(move |r| (c, r)))
            .map(|(c, r)| *camera.ray(c, r).unwrap())
            .collect();
        camera.refine();

        let after = camera.sample_grid().cells;
        assert_eq!((after.columns(), after.rows()), (16, 12));
        for (c, r, cell) in after.iter() {
            if c % 2 == 0 && r % 2 == 0 {
                assert_eq!(cell, before.get(c / 2, r / 2).unwrap());
                assert_eq!(camera.ray(c, r).unwrap(), &old_rays[c / 2 * 6 + r / 2]);
            } else {
                assert!(cell.is_none());
            }
        }
        assert!(after.iter().any(|(_, _, cell)| matches!(cell, Some(c) if c.x > 0.0)));
    }

    #[test]
    fn test_refined_rays_match_grid_formula() {
        let mut camera = Camera::new(small_config(), looking_down());
        let coarse = *camera.ray(1, 1).unwrap();
        camera.refine();
        assert_eq!(camera.ray(2, 2).unwrap(), &coarse);
        let fine = Camera::new(
            small_config().with_resolution(8, 6).with_footprint(2),
            looking_down(),
        );
        let expected = fine.ray(2, 2).unwrap();
        assert!((coarse.direction - expected.direction).length() < 1e-12);
    }

    #[test]
    fn test_one_column_per_tick() {
        let (surfaces, lights) = floor_scene();
        let mut camera = Camera::new(small_config(), looking_down());
        camera.tick(&surfaces, &lights, Command::None);

        let report = camera.tick(&surfaces, &lights, Command::None);
        assert_eq!(report.traced, 3);
        assert_eq!(
            camera.state(),
            SamplerState::Active {
                footprint: 2,
                cursor: 1
            }
        );
        assert!((0..6).all(|r| is_traced(&camera, 0, r)));
        assert!((0..6).all(|r| !is_traced(&camera, 1, r)));

        let report = camera.tick(&surfaces, &lights, Command::None);
        assert_eq!(report.traced, 6);
        assert!((0..6).all(|r| is_traced(&camera, 1, r)));
    }

    #[test]
    fn test_reaches_complete() {
        let (surfaces, lights) = floor_scene();
        let config = CameraConfig::default().with_resolution(2, 2).with_footprint(2);
        let mut camera = Camera::new(config, looking_down());

        let first = camera.tick(&surfaces, &lights, Command::None);
        assert!(!first.refined && !first.completed);
        assert_eq!(camera.resolution(), (2, 2));

        let mut reports = Vec::new();
        for _ in 0..4 {
            reports.push(camera.tick(&surfaces, &lights, Command::None));
        }
        assert!(reports[0].refined);
        assert_eq!(camera.resolution(), (4, 4));
        assert!(reports[1..].iter().all(|r| !r.refined));
        assert!(reports[..3].iter().all(|r| !r.completed));
        assert!(reports[3].completed);
        assert_eq!(camera.state(), SamplerState::Complete);
        assert!(camera.is_complete());
        assert!(camera.sample_grid().cells.iter().all(|(_, _, c)| c.is_some()));

        let idle = camera.tick(&surfaces, &lights, Command::None);
        assert_eq!(idle, TickReport::default());
        assert!(camera.is_complete());
    }

    #[test]
    fn test_footprint_one_completes_after_coarse_pass() {
        let config = CameraConfig::default().with_resolution(2, 2).with_footprint(1);
        let mut camera = Camera::new(config, Viewpoint::default());
        let report = camera.tick(&[], &[], Command::None);
        assert_eq!(report.traced, 4);
        assert!(report.completed);
        assert!(!report.refined);
    }

    #[test]
    fn test_empty_grid_completes_without_panicking() {
        for (columns, rows) in [(0, 3), (3, 0), (0, 0)] {
            let config = CameraConfig::default().with_resolution(columns, rows).with_footprint(4);
            let mut camera = Camera::new(config, Viewpoint::default());

            let first = camera.tick(&[], &[], Command::None);
            assert_eq!(first.traced, 0);
            assert!(first.completed);
            assert_eq!(camera.tick(&[], &[], Command::None), TickReport::default());
            assert!(camera.is_complete());
        }
    }

    #[test]
    fn test_move_resets_everything() {
        let (surfaces, lights) = floor_scene();
        let mut camera = Camera::new(small_config(), looking_down());
        for _ in 0..4 {
            camera.tick(&surfaces, &lights, Command::None);
        }
        assert_eq!(camera.footprint(), 2);

        assert!(camera.apply_command(Command::Forward));
        assert_eq!(camera.resolution(), (4, 3));
        assert_eq!(camera.footprint(), 4);
        assert_eq!(
            camera.state(),
            SamplerState::Active {
                footprint: 4,
                cursor: 0
            }
        );
        assert!(camera.sample_grid().cells.iter().all(|(_, _, c)| c.is_none()));
        assert!((camera.position() - DVec3::new(1.0, 0.0, 5.0)).length() < 1e-12);
        assert_eq!(camera.ray(0, 0).unwrap().origin, camera.position());
    }

    #[test]
    fn test_moving_tick_retraces_coarse_grid() {
        let (surfaces, lights) = floor_scene();
        let mut camera = Camera::new(small_config(), looking_down());
        camera.tick(&surfaces, &lights, Command::None);

        let report = camera.tick(&surfaces, &lights, Command::TurnLeft);
        assert!(report.reset);
        assert_eq!(report.traced, 12);
        assert!(!report.refined);
        assert_eq!(camera.sample_grid().footprint, 4);
    }

    #[test]
    fn test_reset_after_complete() {
        let config = CameraConfig::default().with_resolution(1, 1).with_footprint(1);
        let mut camera = Camera::new(config, Viewpoint::default());
        camera.tick(&[], &[], Command::None);
        assert!(camera.is_complete());

        camera.set_pose(DVec3::new(1.0, 2.0, 3.0), 0.5, 1.0);
        assert!(!camera.is_complete());
        assert_eq!(camera.pose().position, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(camera.pose().orientation, Orientation::new(0.5, 1.0));
    }

    #[test]
    fn test_command_pose_updates() {
        let mut camera = Camera::new(small_config(), Viewpoint::default());

        camera.apply_command(Command::TurnRight);
        assert!((camera.orientation().yaw - (TAU - 0.05)).abs() < 1e-12);
        camera.apply_command(Command::TurnLeft);
        assert!(camera.orientation().yaw.abs() < 1e-12 || (camera.orientation().yaw - TAU).abs() < 1e-12);

        camera.apply_command(Command::LookUp);
        assert!((camera.orientation().pitch - (FRAC_PI_2 - 0.05)).abs() < 1e-12);
        camera.apply_command(Command::LookDown);
        assert!((camera.orientation().pitch - FRAC_PI_2).abs() < 1e-12);

        let mut camera = Camera::new(small_config(), Viewpoint::default());
        camera.apply_command(Command::StrafeRight);
        assert!((camera.position() - DVec3::new(0.0, -1.0, 0.0)).length() < 1e-12);
        camera.apply_command(Command::StrafeLeft);
        camera.apply_command(Command::Ascend);
        assert!((camera.position() - DVec3::new(0.0, 0.0, 1.0)).length() < 1e-12);
        camera.apply_command(Command::Back);
        camera.apply_command(Command::Descend);
        assert!((camera.position() - DVec3::new(-1.0, 0.0, 0.0)).length() < 1e-12);

        assert!(!camera.apply_command(Command::None));
    }

    #[test]
    fn test_none_keeps_samples() {
        let (surfaces, lights) = floor_scene();
        let mut camera = Camera::new(small_config(), looking_down());
        camera.tick(&surfaces, &lights, Command::None);
        assert!(!camera.apply_command(Command::None));
        assert!(is_traced(&camera, 0, 0));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let (surfaces, lights) = floor_scene();
        let mut parallel = Camera::new(small_config(), looking_down());
        let mut sequential = Camera::new(small_config().with_parallel(false), looking_down());

        for _ in 0..5 {
            parallel.tick(&surfaces, &lights, Command::None);
            sequential.tick(&surfaces, &lights, Command::None);
        }
        assert_eq!(parallel.sample_grid().cells, sequential.sample_grid().cells);
    }

    #[test]
    fn test_progress() {
        let mut camera = Camera::new(CameraConfig::default(), Viewpoint::default());
        let progress = camera.progress();
        assert_eq!(progress.level, 0);
        assert_eq!(progress.levels, 6);
        assert_eq!(progress.columns, 16);

        camera.tick(&[], &[], Command::None);
        let progress = camera.progress();
        assert_eq!(progress.level, 0);
        assert_eq!(progress.cursor, 16);

        camera.tick(&[], &[], Command::None);
        let progress = camera.progress();
        assert_eq!(progress.level, 1);
        assert_eq!(progress.footprint, 32);
        assert_eq!(progress.columns, 32);
        assert_eq!(progress.cursor, 1);
    }

    #[test]
    fn test_config_from_json() {
        let config: CameraConfig =
            serde_json::from_str(r#"{"initial_columns": 8, "parallel": false}"#).unwrap();
        assert_eq!(config.initial_columns, 8);
        assert_eq!(config.initial_rows, 9);
        assert!(!config.parallel);
    }
}
