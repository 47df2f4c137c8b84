use crate::accel::Ray;
use crate::march::{MarchConfig, MarchOutcome, MarchResult, QualityTier};
use crate::scene::DistanceField;
use glam::{Vec3, Vec4};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadingConfig {
    /// Forward-difference offset for normals.
    pub normal_epsilon: f32,
    /// Upper bound on shadow march samples.
    pub shadow_steps: u32,
    pub shadow_min_t: f32,
    /// Penumbra sharpness; larger is harder.
    pub shadow_softness: f32,
    /// Brightness kept in full shadow.
    pub shadow_strength: f32,
    pub ambient: f32,
    pub sky_color: Vec4,
    pub fog_exponent: f32,
    /// Ray clearance around the creature that draws an outline, 0 disables it.
    pub outline_width: f32,
    pub outline_color: Vec3,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self::for_tier(QualityTier::default())
    }
}

impl ShadingConfig {
    pub fn for_tier(tier: QualityTier) -> Self {
        Self {
            normal_epsilon: 0.01,
            shadow_steps: tier.shadow_steps(),
            shadow_min_t: 0.1,
            shadow_softness: 16.0,
            shadow_strength: 0.5,
            ambient: 0.1,
            sky_color: Vec4::new(0.7, 0.8, 0.9, 1.0),
            fog_exponent: 0.7,
            outline_width: 0.0,
            outline_color: Vec3::new(0.05, 0.05, 0.08),
        }
    }

    pub fn with_outline(mut self, width: f32, color: Vec3) -> Self {
        self.outline_width = width;
        self.outline_color = color;
        self
    }

    pub fn with_shadow(mut self, steps: u32, softness: f32) -> Self {
        self.shadow_steps = steps;
        self.shadow_softness = softness;
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Shader {
    pub config: ShadingConfig,
    pub march: MarchConfig,
}

impl Shader {
    pub fn new(config: ShadingConfig, march: MarchConfig) -> Self {
        Self { config, march }
    }

    /// Forward-difference gradient of the field at `p`.
    pub fn normal<F: DistanceField + ?Sized>(&self, field: &F, p: Vec3) -> Vec3 {
        let e = self.config.normal_epsilon;
        let d = field.sample(p).dist;
        Vec3::new(
            field.sample(p + Vec3::X * e).dist - d,
            field.sample(p + Vec3::Y * e).dist - d,
            field.sample(p + Vec3::Z * e).dist - d,
        )
        .normalize_or(Vec3::Y)
    }

    /// Light visibility from `origin` along `direction`, in `[0, 1]`.
    ///
    /// Any sample closer than 0.001 is full occlusion. Otherwise the result is
    /// the tightest `k * h / t` seen before `max_t` or the step cap.
    pub fn soft_shadow<F: DistanceField + ?Sized>(
        &self,
        field: &F,
        origin: Vec3,
        direction: Vec3,
        min_t: f32,
        max_t: f32,
        k: f32,
    ) -> f32 {
        let mut res: f32 = 1.0;
        let mut t = min_t;

        for _ in 0..self.config.shadow_steps {
            if t >= max_t {
                break;
            }
            let h = field.sample(origin + direction * t).dist;
            if h < 0.001 {
                return 0.0;
            }
            res = res.min(k * h / t);
            t += h.max(0.001);
        }

        res.clamp(0.0, 1.0)
    }

    /// Final colour for one primary ray.
    pub fn shade<F: DistanceField + ?Sized>(
        &self,
        field: &F,
        ray: &Ray,
        result: &MarchResult,
        light: Vec3,
    ) -> Vec4 {
        let cfg = &self.config;

        let color = match result.outcome {
            MarchOutcome::Miss => cfg.sky_color,
            MarchOutcome::Hit { distance, color } => {
                let p = ray.at(distance);
                let n = self.normal(field, p);

                let to_light = light - p;
                let light_dist = to_light.length();
                let l = to_light / light_dist.max(1e-6);
                let diffuse = n.dot(l).max(0.0);

                let shadow = self.soft_shadow(field, p, l, cfg.shadow_min_t, light_dist, cfg.shadow_softness);
                let lit = color * (cfg.ambient + (1.0 - cfg.ambient) * diffuse);
                let shaded = (lit * cfg.shadow_strength).lerp(lit, shadow);

                let fog = (distance / self.march.max_distance).min(1.0).powf(cfg.fog_exponent);
                shaded.extend(1.0).lerp(cfg.sky_color, fog)
            }
        };

        if self.is_outline(result) {
            cfg.outline_color.extend(1.0)
        } else {
            color
        }
    }

    /// True when the ray passed close to the creature without ending on it.
    pub fn is_outline(&self, result: &MarchResult) -> bool {
        let width = self.config.outline_width;
        width > 0.0 && result.nearest > self.march.surface_threshold && result.nearest < width
    }
}
