//! Collision detection between the bird's circle, the pipes, and the
//! world bounds
//!
//! The bird is a circle inscribed in its sprite box. Pipe overlap uses the
//! extent test plus a Euclidean check against the four gap corners, which
//! catches corner clips the extent test alone misses.

use crate::consts::*;

use super::state::{Bird, Pipe};

/// Does the bird's circle overlap either segment of this pipe pair?
pub fn bird_pipe_collision(bird: &Bird, pipe: &Pipe) -> bool {
    let center = bird.center();
    let r = bird.radius;

    // Only meaningful while horizontally aligned with the pipe
    if center.x + r > pipe.x && center.x - r < pipe.x + pipe.width {
        // Too high: into the top segment
        if center.y - r < pipe.top_height {
            return true;
        }
        // Too low: into the bottom segment
        if center.y + r > pipe.bottom_y {
            return true;
        }
    }

    // Corner clips
    pipe.gap_corners()
        .into_iter()
        .any(|corner| center.distance(corner) < r)
}

/// Above the ceiling or through the floor
pub fn bird_out_of_bounds(bird: &Bird) -> bool {
    bird.y < 0.0 || bird.y + BIRD_SIZE > WORLD_HEIGHT
}

/// Test-mode alternative to dying: pin the bird to the visible range and
/// kill its velocity at the edge
pub fn clamp_to_world(bird: &mut Bird) {
    if bird.y + BIRD_SIZE > WORLD_HEIGHT {
        bird.y = WORLD_HEIGHT - BIRD_SIZE;
        bird.velocity = 0.0;
    }
    if bird.y < 0.0 {
        bird.y = 0.0;
        bird.velocity = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bird_at(y: f32) -> Bird {
        let mut bird = Bird::spawn();
        bird.y = y;
        bird
    }

    #[test]
    fn test_bird_clears_the_gap() {
        // Pipe aligned with the bird, gap 150 centered on the bird
        let bird = bird_at(225.0); // center y = 240
        let pipe = Pipe::new(BIRD_X, 165.0, 315.0);
        assert!(!bird_pipe_collision(&bird, &pipe));
    }

    #[test]
    fn test_bird_hits_top_segment() {
        let bird = bird_at(100.0); // center y = 115, top of circle at 100
        let pipe = Pipe::new(BIRD_X, 120.0, 270.0);
        assert!(bird_pipe_collision(&bird, &pipe));
    }

    #[test]
    fn test_bird_hits_bottom_segment() {
        let bird = bird_at(300.0); // bottom of circle at 330
        let pipe = Pipe::new(BIRD_X, 100.0, 325.0);
        assert!(bird_pipe_collision(&bird, &pipe));
    }

    #[test]
    fn test_no_collision_when_horizontally_clear() {
        // Same heights as the top-segment hit, but the pipe is far right
        let bird = bird_at(100.0);
        let pipe = Pipe::new(WORLD_WIDTH, 120.0, 270.0);
        assert!(!bird_pipe_collision(&bird, &pipe));
    }

    #[test]
    fn test_corner_clip_detected() {
        // Circle center at (95, 145), diagonally off the gap's top-left
        // corner at (100, 150): distance ~7.07, well inside the radius.
        let mut bird = Bird::spawn();
        bird.x = 95.0 - bird.radius;
        bird.y = 145.0 - bird.radius;
        let pipe = Pipe::new(100.0, 150.0, 300.0);
        assert!(bird_pipe_collision(&bird, &pipe));
    }

    #[test]
    fn test_out_of_bounds() {
        assert!(bird_out_of_bounds(&bird_at(-0.1)));
        assert!(bird_out_of_bounds(&bird_at(WORLD_HEIGHT - BIRD_SIZE + 0.1)));
        assert!(!bird_out_of_bounds(&bird_at(200.0)));
    }

    #[test]
    fn test_clamp_to_world_zeroes_velocity() {
        let mut bird = bird_at(WORLD_HEIGHT);
        bird.velocity = 9.0;
        clamp_to_world(&mut bird);
        assert_eq!(bird.y, WORLD_HEIGHT - BIRD_SIZE);
        assert_eq!(bird.velocity, 0.0);

        let mut bird = bird_at(-20.0);
        bird.velocity = -7.4;
        clamp_to_world(&mut bird);
        assert_eq!(bird.y, 0.0);
        assert_eq!(bird.velocity, 0.0);
    }
}
