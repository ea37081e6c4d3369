use meshrender_core::{Camera, ColoredMesh, Error, PointLight, RasterImage, Result};
use meshrender_lighting::add_light;
use meshrender_raster::{render_colors, RasterConfig};
use meshrender_transform::{
    ndc_to_image_coords, orthographic_project, perspective_project, to_camera_space,
    to_image_coords, PerspectiveParams, SimilarityTransform,
};

/// How camera-space vertices reach the image plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Parallel projection straight down the view axis
    Orthographic,
    /// Perspective projection through a symmetric frustum
    Perspective(PerspectiveParams),
}

impl Default for Projection {
    fn default() -> Self {
        Self::Orthographic
    }
}

/// Everything one render request needs besides the mesh itself
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    /// World placement applied to the mesh before anything else
    pub placement: SimilarityTransform,
    /// Point lights shading the placed mesh
    pub lights: Vec<PointLight>,
    /// Camera observing the placed mesh
    pub camera: Camera,
    /// Projection onto the image plane
    pub projection: Projection,
    /// Output height in rows
    pub height: usize,
    /// Output width in columns
    pub width: usize,
    /// Rasterization options
    pub raster: RasterConfig,
}

impl RenderParams {
    /// Parameters for an unlit, identity-placed, orthographic render
    pub fn new(camera: Camera, height: usize, width: usize) -> Self {
        Self {
            placement: SimilarityTransform::identity(),
            lights: Vec::new(),
            camera,
            projection: Projection::default(),
            height,
            width,
            raster: RasterConfig::default(),
        }
    }

    /// Set the world placement
    pub fn with_placement(mut self, placement: SimilarityTransform) -> Self {
        self.placement = placement;
        self
    }

    /// Add one light
    pub fn with_light(mut self, light: PointLight) -> Self {
        self.lights.push(light);
        self
    }

    /// Replace the whole light list
    pub fn with_lights(mut self, lights: Vec<PointLight>) -> Self {
        self.lights = lights;
        self
    }

    /// Set the projection
    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Set the rasterization options
    pub fn with_raster(mut self, raster: RasterConfig) -> Self {
        self.raster = raster;
        self
    }
}

/// Run the full pipeline: place the mesh in the world, shade it, frame
/// it with the camera, project, and rasterize.
///
/// Stages run strictly in that order and each returns fresh arrays, so
/// the mesh and parameters are left untouched and a failed stage never
/// leaves partial output: the image exists only once every vertex made
/// it through.
pub fn render(mesh: &ColoredMesh, params: &RenderParams) -> Result<RasterImage> {
    let placed = params.placement.apply_all(&mesh.vertices)?;
    let lit = add_light(&placed, &mesh.triangles, &mesh.colors, &params.lights)?;
    let camera_space = to_camera_space(&placed, &params.camera)?;

    let image_space = match params.projection {
        Projection::Orthographic => {
            let projected = orthographic_project(&camera_space);
            to_image_coords(&projected, params.height, params.width)?
        }
        Projection::Perspective(frustum) => {
            let projected = perspective_project(&camera_space, &frustum)?;
            ndc_to_image_coords(&projected, params.height, params.width)?
        }
    };

    render_colors(
        &image_space,
        &mesh.triangles,
        &lit,
        params.height,
        params.width,
        &params.raster,
    )
}

/// Scale factor that makes the mesh `target` units tall, the usual way
/// a model is sized relative to the output image
pub fn fit_height_scale(mesh: &ColoredMesh, target: f32) -> Result<f32> {
    let extent = mesh.height_extent();
    if extent <= 0.0 {
        return Err(Error::invalid_mesh(
            "mesh has no vertical extent to fit a scale to",
        ));
    }
    Ok(target / extent)
}
