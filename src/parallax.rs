/// Pointer position relative to the viewport centre, each axis in `[-1, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub fn normalized(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        let axis = |c: f64, extent: f64| {
            if !extent.is_finite() || extent <= 0.0 {
                0.0
            } else {
                ((c / extent - 0.5) * 2.0).clamp(-1.0, 1.0)
            }
        };
        Self {
            x: axis(client_x, width),
            y: axis(client_y, height),
        }
    }

    pub fn tilt(&self, degrees: f64) -> String {
        format!(
            "rotateX({:.2}deg) rotateY({:.2}deg)",
            self.y * degrees,
            self.x * degrees
        )
    }

    pub fn shift(&self, x_px: f64, y_px: f64) -> String {
        format!(
            "translateX({:.2}px) translateY({:.2}px)",
            self.x * x_px,
            self.y * y_px
        )
    }

    pub fn spin(&self, degrees: f64, scale: f64) -> String {
        format!(
            "rotate({:.2}deg) scale({:.3})",
            self.x * degrees,
            1.0 + self.y * scale
        )
    }

    /// Radial highlight centred on the pointer, moving `spread` percent per unit.
    pub fn glow(&self, spread: f64) -> String {
        format!(
            "radial-gradient(circle at {:.1}% {:.1}%, var(--color-primary), transparent 70%)",
            50.0 + self.x * spread,
            50.0 + self.y * spread
        )
    }
}

pub fn scroll_offset(progress: f64, distance: f64) -> String {
    format!("translateY({:.2}px)", 0.0 - progress.clamp(0.0, 1.0) * distance)
}

/// Fraction of the page scrolled, `0.0` when the page does not scroll.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized() {
        let p = Pointer::normalized(0.0, 600.0, 800.0, 600.0);
        assert_eq!(p, Pointer { x: -1.0, y: 1.0 });
        let centre = Pointer::normalized(400.0, 300.0, 800.0, 600.0);
        assert_eq!(centre, Pointer::default());
        assert_eq!(Pointer::normalized(10.0, 10.0, 0.0, 0.0), Pointer::default());
        assert_eq!(
            Pointer::normalized(0.0, 0.0, f64::INFINITY, f64::INFINITY),
            Pointer::default()
        );
    }

    #[test]
    fn test_css() {
        let p = Pointer { x: 0.5, y: -1.0 };
        assert_eq!(p.tilt(2.0), "rotateX(-2.00deg) rotateY(1.00deg)");
        assert_eq!(p.shift(15.0, 10.0), "translateX(7.50px) translateY(-10.00px)");
        assert_eq!(scroll_offset(0.5, 400.0), "translateY(-200.00px)");
        assert_eq!(scroll_offset(2.0, 150.0), "translateY(-150.00px)");
    }

    #[test]
    fn test_spin_and_glow() {
        let p = Pointer { x: -0.5, y: 0.5 };
        assert_eq!(p.spin(5.0, 0.2), "rotate(-2.50deg) scale(1.100)");
        assert_eq!(Pointer::default().spin(5.0, 0.2), "rotate(0.00deg) scale(1.000)");
        assert_eq!(
            p.glow(20.0),
            "radial-gradient(circle at 40.0% 60.0%, var(--color-primary), transparent 70%)"
        );
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(50.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(5000.0, 2000.0, 1000.0), 1.0);
    }
}
