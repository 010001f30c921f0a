pub mod frame;
pub mod joystick;
pub mod keyboard;
pub mod movement;

pub use frame::RafScheduler;
pub use joystick::{JoystickReading, JoystickRegion, JoystickState};
pub use keyboard::KeyboardInput;
pub use movement::MovementLoop;
