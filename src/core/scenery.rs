// Fixed stage decoration: swinging spotlights, pulsing glow blobs and perk pills.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spotlight {
    pub id: u32,
    pub left_pct: f32,
    pub width_px: f32,
    pub color: &'static str,
    pub duration: f32,
    pub delay: f32,
    /// Skew in degrees, kept constant while swinging.
    pub skew: f32,
    /// Horizontal swing amplitude in px, either side of rest.
    pub swing_x: f32,
}

pub const SPOTLIGHTS: [Spotlight; 6] = [
    Spotlight {
        id: 0,
        left_pct: 5.0,
        width_px: 340.0,
        color: "rgba(236,64,122,0.40)",
        duration: 7.0,
        delay: 0.0,
        skew: 14.0,
        swing_x: 65.0,
    },
    Spotlight {
        id: 1,
        left_pct: 20.0,
        width_px: 280.0,
        color: "rgba(168,85,247,0.34)",
        duration: 9.5,
        delay: 1.4,
        skew: -7.0,
        swing_x: 80.0,
    },
    Spotlight {
        id: 2,
        left_pct: 38.0,
        width_px: 320.0,
        color: "rgba(59,130,246,0.30)",
        duration: 11.0,
        delay: 0.7,
        skew: 5.0,
        swing_x: 55.0,
    },
    Spotlight {
        id: 3,
        left_pct: 56.0,
        width_px: 290.0,
        color: "rgba(244,114,182,0.37)",
        duration: 8.0,
        delay: 2.3,
        skew: -11.0,
        swing_x: 70.0,
    },
    Spotlight {
        id: 4,
        left_pct: 74.0,
        width_px: 310.0,
        color: "rgba(139,92,246,0.32)",
        duration: 10.0,
        delay: 1.0,
        skew: 8.0,
        swing_x: 60.0,
    },
    Spotlight {
        id: 5,
        left_pct: 90.0,
        width_px: 250.0,
        color: "rgba(251,113,133,0.35)",
        duration: 6.8,
        delay: 1.9,
        skew: -5.0,
        swing_x: 50.0,
    },
];

impl Spotlight {
    pub fn animation_name(&self) -> String {
        format!("swing{}", self.id)
    }

    pub fn keyframes(&self) -> String {
        format!(
            "@keyframes {name} {{ from {{ transform: skewX({skew}deg) translateX(-{dx}px); }} to {{ transform: skewX({skew}deg) translateX({dx}px); }} }}",
            name = self.animation_name(),
            skew = self.skew,
            dx = self.swing_x,
        )
    }

    pub fn style(&self) -> String {
        format!(
            "position:absolute;top:-40px;left:{left}%;width:{w}px;height:80vh;\
             background:radial-gradient(ellipse 100% 55% at 50% 0%, {c} 0%, transparent 72%);\
             transform-origin:top center;filter:blur(10px);\
             animation:{name} {dur}s ease-in-out {delay}s infinite alternate;",
            left = self.left_pct,
            w = self.width_px,
            c = self.color,
            name = self.animation_name(),
            dur = self.duration,
            delay = self.delay,
        )
    }
}

/// Soft radial glow pinned to a corner of the stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowBlob {
    pub name: &'static str,
    /// CSS placement declarations, e.g. `bottom:-100px;left:12%;`.
    pub placement: &'static str,
    pub diameter_px: f32,
    pub color: &'static str,
    pub blur_px: f32,
    pub duration: f32,
    pub delay: f32,
    pub scale: (f32, f32),
    pub opacity: (f32, f32),
}

pub const GLOW_BLOBS: [GlowBlob; 3] = [
    GlowBlob {
        name: "blobA",
        placement: "bottom:-100px;left:12%;",
        diameter_px: 400.0,
        color: "rgba(236,64,122,0.28)",
        blur_px: 45.0,
        duration: 6.0,
        delay: 0.0,
        scale: (1.0, 1.3),
        opacity: (0.7, 1.0),
    },
    GlowBlob {
        name: "blobB",
        placement: "bottom:-80px;right:8%;",
        diameter_px: 340.0,
        color: "rgba(139,92,246,0.24)",
        blur_px: 38.0,
        duration: 8.0,
        delay: 1.2,
        scale: (1.1, 1.35),
        opacity: (0.6, 0.95),
    },
    GlowBlob {
        name: "blobC",
        placement: "top:30%;left:-60px;",
        diameter_px: 280.0,
        color: "rgba(59,130,246,0.18)",
        blur_px: 32.0,
        duration: 10.0,
        delay: 2.5,
        scale: (0.9, 1.25),
        opacity: (0.5, 0.9),
    },
];

impl GlowBlob {
    pub fn keyframes(&self) -> String {
        format!(
            "@keyframes {} {{ from {{ transform: scale({}); opacity: {}; }} to {{ transform: scale({}); opacity: {}; }} }}",
            self.name, self.scale.0, self.opacity.0, self.scale.1, self.opacity.1
        )
    }

    pub fn style(&self) -> String {
        format!(
            "position:absolute;{place}width:{d}px;height:{d}px;border-radius:50%;\
             background:radial-gradient(circle, {c} 0%, transparent 70%);filter:blur({b}px);\
             animation:{name} {dur}s ease-in-out {delay}s infinite alternate;",
            place = self.placement,
            d = self.diameter_px,
            c = self.color,
            b = self.blur_px,
            name = self.name,
            dur = self.duration,
            delay = self.delay,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Perk {
    pub emoji: &'static str,
    pub label: &'static str,
}

pub const ASK_PERKS: [Perk; 3] = [
    Perk {
        emoji: "🎶",
        label: "Concerts",
    },
    Perk {
        emoji: "🍕",
        label: "Food adventures",
    },
    Perk {
        emoji: "✈️",
        label: "World travel",
    },
];

pub const CELEBRATION_PERKS: [Perk; 3] = [
    Perk {
        emoji: "🎶",
        label: "Concerts forever",
    },
    Perk {
        emoji: "🍕",
        label: "Food dates",
    },
    Perk {
        emoji: "✈️",
        label: "World tour",
    },
];

/// Every `@keyframes` rule the stage needs, one per line.
pub fn stage_keyframes() -> String {
    SPOTLIGHTS
        .iter()
        .map(Spotlight::keyframes)
        .chain(GLOW_BLOBS.iter().map(GlowBlob::keyframes))
        .collect::<Vec<_>>()
        .join("\n")
}
