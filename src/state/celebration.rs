use rand::Rng;

const PARTICLE_COUNT: usize = 60;
const LIFETIME_TICKS: u16 = 25;
const GLYPHS: [char; 6] = ['*', '+', '•', '✦', '~', '°'];
const PALETTE: [(u8, u8, u8); 6] = [
    (235, 111, 146),
    (246, 193, 119),
    (156, 207, 216),
    (196, 167, 231),
    (158, 206, 106),
    (255, 202, 40),
];

/// One confetti piece. Positions are fractions of the drawing area so the
/// overlay survives terminal resizes.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub glyph: char,
    pub color: (u8, u8, u8),
}

/// Short-lived confetti burst shown after a task is completed.
///
#[derive(Clone, Debug)]
pub struct Celebration {
    particles: Vec<Particle>,
    ticks_left: u16,
}

impl Celebration {
    pub fn new() -> Self {
        Celebration::with_rng(&mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng>(rng: &mut R) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng.gen_range(0.0..1.0),
                y: rng.gen_range(-0.4..0.1),
                dx: rng.gen_range(-0.01..0.01),
                dy: rng.gen_range(0.02..0.06),
                glyph: GLYPHS[rng.gen_range(0..GLYPHS.len())],
                color: PALETTE[rng.gen_range(0..PALETTE.len())],
            })
            .collect();
        Celebration {
            particles,
            ticks_left: LIFETIME_TICKS,
        }
    }

    /// Particles currently inside the drawing area.
    ///
    pub fn visible(&self) -> impl Iterator<Item = &Particle> {
        self.particles
            .iter()
            .filter(|p| (0.0..1.0).contains(&p.x) && (0.0..1.0).contains(&p.y))
    }

    /// Move every particle one step. Returns false once the burst is over.
    ///
    pub fn advance(&mut self) -> bool {
        if self.ticks_left == 0 {
            return false;
        }
        self.ticks_left -= 1;
        for particle in self.particles.iter_mut() {
            particle.x += particle.dx;
            particle.y += particle.dy;
        }
        self.ticks_left > 0
    }
}

impl Default for Celebration {
    fn default() -> Self {
        Celebration::new()
    }
}
