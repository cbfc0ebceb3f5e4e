use std::fmt;

use image::Rgb;

/// Vegetation health band named by a color stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HealthClass {
    Soil,
    Critical,
    Stressed,
    Healthy,
    Lush,
}

impl HealthClass {
    pub const ALL: [HealthClass; 5] = [
        HealthClass::Soil,
        HealthClass::Critical,
        HealthClass::Stressed,
        HealthClass::Healthy,
        HealthClass::Lush,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for HealthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthClass::Soil => write!(f, "Soil"),
            HealthClass::Critical => write!(f, "Critical"),
            HealthClass::Stressed => write!(f, "Stressed"),
            HealthClass::Healthy => write!(f, "Healthy"),
            HealthClass::Lush => write!(f, "Lush"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub value: f32,
    pub color: Rgb<u8>,
    pub class: HealthClass,
}

/// Soil → Critical → Stressed → Healthy → Lush, evenly spaced over [0, 1].
pub const COLOR_STOPS: [ColorStop; 5] = [
    ColorStop {
        value: 0.0,
        color: Rgb([139, 90, 43]),
        class: HealthClass::Soil,
    },
    ColorStop {
        value: 0.25,
        color: Rgb([215, 48, 39]),
        class: HealthClass::Critical,
    },
    ColorStop {
        value: 0.5,
        color: Rgb([254, 224, 139]),
        class: HealthClass::Stressed,
    },
    ColorStop {
        value: 0.75,
        color: Rgb([102, 189, 99]),
        class: HealthClass::Healthy,
    },
    ColorStop {
        value: 1.0,
        color: Rgb([26, 152, 80]),
        class: HealthClass::Lush,
    },
];

fn saturate(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Map an NDVI value to its heatmap color.
///
/// The value is clamped to [0, 1] first, so negative indices render as soil
/// and anything above 1 renders as lush. Each channel is interpolated
/// linearly between the two bracketing stops and rounded.
pub fn map_value_to_color(value: f32) -> Rgb<u8> {
    let v = saturate(value);

    for pair in COLOR_STOPS.windows(2) {
        let (lo, hi) = (&pair[0], &pair[1]);
        if v <= hi.value {
            let t = (v - lo.value) / (hi.value - lo.value);
            let channel = |i: usize| {
                let start = lo.color.0[i] as f32;
                let end = hi.color.0[i] as f32;
                (start + (end - start) * t).round().clamp(0.0, 255.0) as u8
            };
            return Rgb([channel(0), channel(1), channel(2)]);
        }
    }

    COLOR_STOPS[COLOR_STOPS.len() - 1].color
}

/// Health band of a value: the last stop at or below the clamped value.
pub fn health_class(value: f32) -> HealthClass {
    let v = saturate(value);
    COLOR_STOPS
        .iter()
        .rev()
        .find(|stop| stop.value <= v)
        .map(|stop| stop.class)
        .unwrap_or(HealthClass::Soil)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_are_sorted_and_span_unit_interval() {
        assert_eq!(COLOR_STOPS[0].value, 0.0);
        assert_eq!(COLOR_STOPS[COLOR_STOPS.len() - 1].value, 1.0);
        for pair in COLOR_STOPS.windows(2) {
            assert!(pair[0].value < pair[1].value);
        }
    }

    #[test]
    fn test_saturate_nan_is_zero() {
        assert_eq!(saturate(f32::NAN), 0.0);
    }

    #[test]
    fn test_class_indices_match_stop_order() {
        for (i, stop) in COLOR_STOPS.iter().enumerate() {
            assert_eq!(stop.class.index(), i);
            assert_eq!(HealthClass::ALL[i], stop.class);
        }
    }
}
