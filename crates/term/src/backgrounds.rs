//! Decorative level backdrops.
//!
//! Static ASCII art printed at level start. Purely cosmetic; no behavioral
//! effect on the engine.

const LEVEL_1: &str = "\
Level 1: Smiley Face
----------
   +  +
 |      |
  ^----^
------------
";

const LEVEL_2: &str = "\
Level 2: Tree House
      /\\
     /  \\
    /    \\
   /______\\
   |  *** |
   |  *** |
   |______|
      ||
-------------
";

const LEVEL_3: &str = "\
Level 3: Beach
  ~~~~~~~~~~
 ~     ~~~  ~
  ~ ~~~    ~
   ~      ~
 -----------
   *      *
-------------
";

const LEVEL_4: &str = "\
Level 4: Ocean
 ~~~~~~~~~~~~
~    ~~~     ~
  ~~  ~~~   ~~
   ~~~   ~~~
 ~~   ~~~~~
~~~~~~~~~~~~
";

const LEVEL_5: &str = "\
Level 5: Bright Star
    *     *
   * *   * *
  *   * *   *
 *     *     *
  *   ***   *
   * *   * *
    *     *
 ***********
";

const LEVEL_6: &str = "\
Level 6: Christmas Tree
     /\\
    /  \\
   /____\\
  /______\\
 /  /\\    \\
/__/__\\____\\
 |  ***  |
 |_______|
-------------
";

const LEVEL_7: &str = "\
Level 7: Bridge
 /|\\     /|\\
/ | \\   / | \\
  |  \\ /  |
============
  |       |
  |       |
-------------
";

const LEVEL_8: &str = "\
Level 8: Fish
     |
 ~~~~|~~~~~~
     |
     |
  <(()=<

-------------
";

/// Backdrop for a level, clamped to the last one for out-of-range input.
pub fn background(level: u8) -> &'static str {
    match level {
        1 => LEVEL_1,
        2 => LEVEL_2,
        3 => LEVEL_3,
        4 => LEVEL_4,
        5 => LEVEL_5,
        6 => LEVEL_6,
        7 => LEVEL_7,
        _ => LEVEL_8,
    }
}
