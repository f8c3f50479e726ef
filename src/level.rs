//! Level geometry
//!
//! A level is plain data: rectangles, polygons and movers. `Level::course()`
//! is the shipped course; other levels can be loaded from JSON and are
//! validated when turned into a `World`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::kinematic::{Axis, KinematicPlatform};
use crate::sim::rect::Rect;

/// A moving platform before validation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoverSpec {
    pub rect: Rect,
    pub axis: Axis,
    pub min: f32,
    pub max: f32,
    pub speed: f32,
}

impl MoverSpec {
    pub fn build(&self) -> Result<KinematicPlatform, ConfigError> {
        KinematicPlatform::new(self.rect, self.axis, self.min, self.max, self.speed)
    }
}

/// Extent of the playable world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Walls sit at ±half_extent; leaving that range kills the player
    pub half_extent: f32,
    /// Top of the ground tiles
    pub ground_y: f32,
    /// Falling this far below the ground kills the player
    pub fall_margin: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            half_extent: 10000.0,
            ground_y: 1030.0,
            fall_margin: 500.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub spawn: Vec2,
    #[serde(default)]
    pub bounds: Bounds,
    pub platforms: Vec<Rect>,
    /// Moving platforms the player can stand on
    #[serde(default)]
    pub safe_movers: Vec<MoverSpec>,
    /// Moving platforms that kill on contact
    #[serde(default)]
    pub hazard_movers: Vec<MoverSpec>,
    #[serde(default)]
    pub spikes: Vec<Vec<Vec2>>,
    #[serde(default)]
    pub checkpoints: Vec<Rect>,
    /// Checkpoint indices that are always collected together
    #[serde(default)]
    pub checkpoint_groups: Vec<Vec<usize>>,
    /// Invisible kill zones
    #[serde(default)]
    pub void_zones: Vec<Rect>,
    pub finish: Rect,
}

impl Level {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The shipped course
    pub fn course() -> Self {
        let mover = |&(x, y, w, h, axis, min, max, speed): &(f32, f32, f32, f32, Axis, f32, f32, f32)| {
            MoverSpec {
                rect: Rect::new(x, y, w, h),
                axis,
                min,
                max,
                speed,
            }
        };

        // The platform sliding between x = 800 and x = 1200 above the start
        let shuttle = MoverSpec {
            rect: Rect::new(800.0, 300.0, 100.0, 50.0),
            axis: Axis::X,
            min: 800.0,
            max: 1300.0,
            speed: 50.0,
        };

        Self {
            spawn: Vec2::new(-9425.0, 979.0),
            bounds: Bounds::default(),
            platforms: PLATFORMS
                .iter()
                .map(|&(x, y, w, h)| Rect::new(x, y, w, h))
                .collect(),
            safe_movers: SAFE_MOVERS
                .iter()
                .map(mover)
                .chain(std::iter::once(shuttle))
                .collect(),
            hazard_movers: HAZARD_MOVERS.iter().map(mover).collect(),
            spikes: SPIKES
                .iter()
                .map(|tri| tri.iter().map(|&(x, y)| Vec2::new(x, y)).collect())
                .collect(),
            checkpoints: CHECKPOINTS
                .iter()
                .map(|&(x, y)| Rect::new(x, y, 49.0, 51.0))
                .collect(),
            checkpoint_groups: vec![vec![0, 1]],
            void_zones: vec![Rect::new(2500.0, 979.0, 5200.0, 1000.0)],
            finish: Rect::new(9480.0, 830.0, 20.0, 200.0),
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::course()
    }
}

// Course geometry (world units, y down)

const PLATFORMS: [(f32, f32, f32, f32); 36] = [
    (20.0, 800.0, 100.0, 50.0),
    (400.0, 600.0, 100.0, 50.0),
    (1600.0, 100.0, 100.0, 50.0),
    (1800.0, 300.0, 10.0, 50.0),
    (2400.0, 300.0, 10.0, 50.0),
    (3000.0, 300.0, 10.0, 50.0),
    (3600.0, 300.0, 10.0, 50.0),
    (4200.0, 300.0, 10.0, 50.0),
    (4800.0, 300.0, 10.0, 50.0),
    (5400.0, 300.0, 10.0, 50.0),
    (6000.0, 300.0, 10.0, 50.0),
    (6600.0, 300.0, 10.0, 50.0),
    (-200.0, 0.0, 10.0, 800.0),
    (-800.0, 115.0, 10.0, 915.0),
    (-7298.5, 998.5, 10.0, 50.0),
    (-1514.0, 0.0, 1325.0, 10.0),
    (-1514.0, 0.0, 10.0, 800.0),
    (-1492.0, 538.0, 40.0, 10.0),
    (-1070.0, 896.0, 40.0, 10.0),
    (-1330.0, 722.0, 40.0, 10.0),
    (-1080.0, 276.0, 40.0, 10.0),
    (-794.0, 224.0, 40.0, 10.0),
    (-370.0, 508.0, 40.0, 10.0),
    (-782.0, 630.0, 40.0, 10.0),
    (-578.0, 900.0, 10.0, 40.0),
    (-2854.0, 727.0, 1241.0, 10.0),
    (-2854.0, 727.0, 10.0, 188.0),
    (-3100.5, 423.5, 1590.0, 10.0),
    (-3100.5, 423.5, 10.0, 550.0),
    (-3005.5, 852.5, 75.0, 10.0),
    (-4766.0, 423.0, 1671.0, 10.0),
    (-4766.0, 426.5, 10.0, 553.0),
    (-6800.5, 700.5, 50.0, 10.0),
    (-7777.0, 370.0, 870.0, 10.0),
    (8000.0, 300.0, 1200.0, 10.0),
    (8000.0, 969.0, 1200.0, 10.0),
];

// (x, y, w, h, axis, min, max, speed)
const HAZARD_MOVERS: [(f32, f32, f32, f32, Axis, f32, f32, f32); 14] = [
    (-2834.5, 701.5, 50.0, 20.0, Axis::Y, 450.0, 700.0, 100.0),
    (-2500.0, 400.0, 50.0, 20.0, Axis::Y, 450.0, 700.0, 60.0),
    (-2182.0, 618.0, 50.0, 20.0, Axis::Y, 450.0, 700.0, 40.0),
    (-1633.0, 618.0, 50.0, 20.0, Axis::Y, 450.0, 700.0, 100.0),
    (-1998.0, 618.0, 50.0, 20.0, Axis::Y, 450.0, 700.0, 150.0),
    (-2311.0, 618.0, 50.0, 20.0, Axis::Y, 450.0, 700.0, 90.0),
    (-2647.0, 618.0, 50.0, 20.0, Axis::Y, 450.0, 700.0, 60.0),
    (-2844.5, 500.5, 50.0, 20.0, Axis::X, -2844.5, -1625.5, 60.0),
    (-2844.5, 700.0, 50.0, 20.0, Axis::X, -2844.5, -1625.5, 90.0),
    (-2844.5, 534.0, 50.0, 20.0, Axis::X, -2844.5, -1625.5, 170.0),
    (-2844.5, 570.0, 50.0, 20.0, Axis::X, -2844.5, -1625.5, 140.0),
    (-2844.5, 810.0, 50.0, 20.0, Axis::X, -2844.5, -1625.5, 80.0),
    (-2844.5, 974.0, 50.0, 20.0, Axis::X, -2844.5, -1625.5, 140.0),
    (7300.0, 450.0, 10.0, 580.0, Axis::Y, 450.0, 850.0, 100.0),
];

const SAFE_MOVERS: [(f32, f32, f32, f32, Axis, f32, f32, f32); 4] = [
    (-8800.0, 800.0, 50.0, 20.0, Axis::X, -8800.0, -8400.0, 100.0),
    (-8300.0, 452.5, 50.0, 20.0, Axis::X, -8300.0, -7950.0, 50.0),
    (6700.0, 650.0, 50.0, 20.0, Axis::X, 6700.0, 7100.0, 100.0),
    (7900.0, 660.0, 50.0, 20.0, Axis::X, 7500.0, 7900.0, 100.0),
];

const SPIKES: [[(f32, f32); 3]; 224] = [
    [(6226.0, 104.0), (6201.0, 147.0), (6251.0, 147.0)],
    [(6154.0, 266.0), (6129.0, 309.0), (6179.0, 309.0)],
    [(6409.0, 319.0), (6384.0, 362.0), (6434.0, 362.0)],
    [(6386.0, 80.0), (6361.0, 123.0), (6411.0, 123.0)],
    [(6117.0, -43.0), (6092.0, 0.0), (6142.0, 0.0)],
    [(6247.0, 549.0), (6222.0, 592.0), (6272.0, 592.0)],
    [(6540.0, 411.0), (6515.0, 454.0), (6565.0, 454.0)],
    [(6579.0, 38.0), (6554.0, 81.0), (6604.0, 81.0)],
    [(6416.0, -20.0), (6391.0, 23.0), (6441.0, 23.0)],
    [(6004.0, 65.0), (5979.0, 108.0), (6029.0, 108.0)],
    [(6060.0, 466.0), (6035.0, 509.0), (6085.0, 509.0)],
    [(6198.0, 3.0), (6174.0, 46.0), (6224.0, 46.0)],
    [(-361.0, 987.0), (-386.0, 1031.0), (-336.0, 1031.0)],
    [(-503.0, 987.0), (-528.0, 1031.0), (-478.0, 1031.0)],
    [(-585.0, 984.0), (-610.0, 1028.0), (-560.0, 1028.0)],
    [(-660.0, 989.0), (-685.0, 1033.0), (-635.0, 1033.0)],
    [(-731.0, 984.0), (-756.0, 1028.0), (-706.0, 1028.0)],
    [(-448.0, 987.0), (-473.0, 1031.0), (-423.0, 1031.0)],
    [(-618.0, 51.0), (-644.0, 94.0), (-594.0, 94.0)],
    [(-358.0, 252.0), (-382.0, 295.0), (-332.0, 295.0)],
    [(-624.0, 397.0), (-648.0, 440.0), (-598.0, 440.0)],
    [(-690.0, 842.0), (-716.0, 885.0), (-666.0, 885.0)],
    [(92.0, 743.0), (68.0, 786.0), (118.0, 786.0)],
    [(408.0, 542.0), (382.0, 585.0), (432.0, 585.0)],
    [(2100.0, 281.0), (2076.0, 324.0), (2126.0, 324.0)],
    [(2290.0, 3.0), (2264.0, 46.0), (2314.0, 46.0)],
    [(2704.0, 93.0), (2678.0, 136.0), (2728.0, 136.0)],
    [(3326.0, 3.0), (3302.0, 46.0), (3352.0, 46.0)],
    [(3336.0, 302.0), (3312.0, 345.0), (3362.0, 345.0)],
    [(3924.0, 293.0), (3900.0, 336.0), (3950.0, 336.0)],
    [(4434.0, -91.0), (4410.0, -48.0), (4460.0, -48.0)],
    [(4454.0, 133.0), (4430.0, 176.0), (4480.0, 176.0)],
    [(4988.0, 306.0), (4962.0, 349.0), (5012.0, 349.0)],
    [(5226.0, 299.0), (5200.0, 342.0), (5250.0, 342.0)],
    [(5098.0, 41.0), (5074.0, 84.0), (5124.0, 84.0)],
    [(5666.0, 290.0), (5642.0, 333.0), (5692.0, 333.0)],
    [(5522.0, 73.0), (5498.0, 116.0), (5548.0, 116.0)],
    [(5830.0, 79.0), (5806.0, 122.0), (5856.0, 122.0)],
    [(-9478.0, 968.0), (-9504.0, 1011.0), (-9454.0, 1011.0)],
    [(-1132.0, 975.0), (-1158.0, 1018.0), (-1108.0, 1018.0)],
    [(-1470.0, 698.0), (-1496.0, 741.0), (-1446.0, 741.0)],
    [(-840.0, 986.0), (-866.0, 1029.0), (-816.0, 1029.0)],
    [(-1312.0, 805.0), (-1338.0, 848.0), (-1288.0, 848.0)],
    [(-1478.0, 278.0), (-1502.0, 321.0), (-1452.0, 321.0)],
    [(-1162.0, 476.0), (-1186.0, 519.0), (-1136.0, 519.0)],
    [(-836.0, 771.0), (-862.0, 814.0), (-812.0, 814.0)],
    [(-1012.0, 654.0), (-1036.0, 697.0), (-986.0, 697.0)],
    [(-938.0, 286.0), (-962.0, 329.0), (-912.0, 329.0)],
    [(-1402.0, 43.0), (-1428.0, 86.0), (-1378.0, 86.0)],
    [(-1214.0, 34.0), (-1238.0, 77.0), (-1188.0, 77.0)],
    [(-1054.0, 24.0), (-1080.0, 67.0), (-1030.0, 67.0)],
    [(-1062.0, 968.0), (-1086.0, 1011.0), (-1036.0, 1011.0)],
    [(-980.0, 966.0), (-1004.0, 1009.0), (-954.0, 1009.0)],
    [(-908.0, 961.0), (-932.0, 1004.0), (-882.0, 1004.0)],
    [(-974.0, 483.0), (-998.0, 526.0), (-948.0, 526.0)],
    [(-860.0, 606.0), (-886.0, 649.0), (-836.0, 649.0)],
    [(-858.0, 411.0), (-882.0, 454.0), (-832.0, 454.0)],
    [(-1080.0, 344.0), (-1104.0, 387.0), (-1054.0, 387.0)],
    [(-836.0, 290.0), (-860.0, 333.0), (-810.0, 333.0)],
    [(-1094.0, 591.0), (-1120.0, 634.0), (-1070.0, 634.0)],
    [(-1390.0, 762.0), (-1416.0, 805.0), (-1366.0, 805.0)],
    [(-1474.0, 101.0), (-1498.0, 144.0), (-1448.0, 144.0)],
    [(-1458.0, 176.0), (-1484.0, 219.0), (-1434.0, 219.0)],
    [(-1476.0, 606.0), (-1502.0, 649.0), (-1452.0, 649.0)],
    [(-1480.0, 338.0), (-1506.0, 381.0), (-1456.0, 381.0)],
    [(-766.0, 353.0), (-792.0, 396.0), (-742.0, 396.0)],
    [(-762.0, 706.0), (-788.0, 749.0), (-738.0, 749.0)],
    [(-214.0, 472.0), (-240.0, 515.0), (-190.0, 515.0)],
    [(-218.0, 756.0), (-242.0, 799.0), (-192.0, 799.0)],
    [(-298.0, 732.0), (-324.0, 775.0), (-274.0, 775.0)],
    [(-564.0, 559.0), (-590.0, 602.0), (-540.0, 602.0)],
    [(-494.0, 548.0), (-518.0, 591.0), (-468.0, 591.0)],
    [(-416.0, 554.0), (-440.0, 597.0), (-390.0, 597.0)],
    [(-224.0, 17.0), (-248.0, 60.0), (-198.0, 60.0)],
    [(-330.0, 567.0), (-356.0, 610.0), (-306.0, 610.0)],
    [(-264.0, 612.0), (-288.0, 655.0), (-238.0, 655.0)],
    [(-3050.0, 675.0), (-3076.0, 718.0), (-3026.0, 718.0)],
    [(-2912.0, 675.0), (-2936.0, 718.0), (-2886.0, 718.0)],
    [(-2984.0, 526.0), (-3008.0, 569.0), (-2958.0, 569.0)],
    [(-2596.0, 785.0), (-2622.0, 828.0), (-2572.0, 828.0)],
    [(-2444.0, 984.0), (-2468.0, 1027.0), (-2418.0, 1027.0)],
    [(-1936.0, 963.0), (-1962.0, 1006.0), (-1912.0, 1006.0)],
    [(-1730.0, 778.0), (-1756.0, 821.0), (-1706.0, 821.0)],
    [(-2300.0, 869.0), (-2324.0, 912.0), (-2274.0, 912.0)],
    [(-2138.0, 953.0), (-2162.0, 996.0), (-2112.0, 996.0)],
    [(-1590.0, 869.0), (-1614.0, 912.0), (-1564.0, 912.0)],
    [(-2758.0, 874.0), (-2784.0, 917.0), (-2734.0, 917.0)],
    [(-2216.0, 745.0), (-2242.0, 788.0), (-2192.0, 788.0)],
    [(-1866.0, 959.0), (-1890.0, 1002.0), (-1840.0, 1002.0)],
    [(-2028.0, 750.0), (-2054.0, 793.0), (-2004.0, 793.0)],
    [(-4602.0, 440.0), (-4626.0, 483.0), (-4576.0, 483.0)],
    [(-4386.0, 437.0), (-4412.0, 480.0), (-4362.0, 480.0)],
    [(-4216.0, 437.0), (-4242.0, 480.0), (-4192.0, 480.0)],
    [(-4294.0, 436.0), (-4318.0, 479.0), (-4268.0, 479.0)],
    [(-4496.0, 441.0), (-4522.0, 484.0), (-4472.0, 484.0)],
    [(-4132.0, 437.0), (-4158.0, 480.0), (-4108.0, 480.0)],
    [(-4070.0, 436.0), (-4096.0, 479.0), (-4046.0, 479.0)],
    [(-3998.0, 440.0), (-4022.0, 483.0), (-3972.0, 483.0)],
    [(-3922.0, 441.0), (-3946.0, 484.0), (-3896.0, 484.0)],
    [(-3830.0, 444.0), (-3854.0, 487.0), (-3804.0, 487.0)],
    [(-3748.0, 440.0), (-3774.0, 483.0), (-3724.0, 483.0)],
    [(-3666.0, 440.0), (-3692.0, 483.0), (-3642.0, 483.0)],
    [(-3594.0, 437.0), (-3620.0, 480.0), (-3570.0, 480.0)],
    [(-3516.0, 441.0), (-3542.0, 484.0), (-3492.0, 484.0)],
    [(-3440.0, 442.0), (-3466.0, 485.0), (-3416.0, 485.0)],
    [(-3368.0, 437.0), (-3392.0, 480.0), (-3342.0, 480.0)],
    [(-3296.0, 441.0), (-3320.0, 484.0), (-3270.0, 484.0)],
    [(-3218.0, 436.0), (-3244.0, 479.0), (-3194.0, 479.0)],
    [(-3150.0, 438.0), (-3174.0, 481.0), (-3124.0, 481.0)],
    [(-4550.0, 986.0), (-4576.0, 1029.0), (-4526.0, 1029.0)],
    [(-4608.0, 986.0), (-4632.0, 1029.0), (-4582.0, 1029.0)],
    [(-4658.0, 984.0), (-4684.0, 1027.0), (-4634.0, 1027.0)],
    [(-4664.0, 447.0), (-4690.0, 490.0), (-4640.0, 490.0)],
    [(-4422.0, 985.0), (-4446.0, 1028.0), (-4396.0, 1028.0)],
    [(-4360.0, 984.0), (-4386.0, 1027.0), (-4336.0, 1027.0)],
    [(-4306.0, 983.0), (-4330.0, 1026.0), (-4280.0, 1026.0)],
    [(-4186.0, 987.0), (-4212.0, 1030.0), (-4162.0, 1030.0)],
    [(-4136.0, 986.0), (-4160.0, 1029.0), (-4110.0, 1029.0)],
    [(-4084.0, 984.0), (-4110.0, 1027.0), (-4060.0, 1027.0)],
    [(-3970.0, 986.0), (-3994.0, 1029.0), (-3944.0, 1029.0)],
    [(-3908.0, 982.0), (-3932.0, 1025.0), (-3882.0, 1025.0)],
    [(-3854.0, 985.0), (-3878.0, 1028.0), (-3828.0, 1028.0)],
    [(-3740.0, 982.0), (-3766.0, 1025.0), (-3716.0, 1025.0)],
    [(-3682.0, 986.0), (-3708.0, 1029.0), (-3658.0, 1029.0)],
    [(-3628.0, 989.0), (-3652.0, 1032.0), (-3602.0, 1032.0)],
    [(-3522.0, 983.0), (-3546.0, 1026.0), (-3496.0, 1026.0)],
    [(-3470.0, 982.0), (-3494.0, 1025.0), (-3444.0, 1025.0)],
    [(-3420.0, 982.0), (-3446.0, 1025.0), (-3396.0, 1025.0)],
    [(-3314.0, 985.0), (-3338.0, 1028.0), (-3288.0, 1028.0)],
    [(-3262.0, 984.0), (-3288.0, 1027.0), (-3238.0, 1027.0)],
    [(-3208.0, 983.0), (-3234.0, 1026.0), (-3184.0, 1026.0)],
    [(-6208.0, 511.0), (-6234.0, 554.0), (-6184.0, 554.0)],
    [(-6192.0, 551.0), (-6216.0, 594.0), (-6166.0, 594.0)],
    [(-6160.0, 592.0), (-6184.0, 635.0), (-6134.0, 635.0)],
    [(-6136.0, 639.0), (-6162.0, 682.0), (-6112.0, 682.0)],
    [(-6114.0, 686.0), (-6140.0, 729.0), (-6090.0, 729.0)],
    [(-6090.0, 729.0), (-6114.0, 772.0), (-6064.0, 772.0)],
    [(-6074.0, 776.0), (-6100.0, 819.0), (-6050.0, 819.0)],
    [(-6056.0, 818.0), (-6082.0, 861.0), (-6032.0, 861.0)],
    [(-6044.0, 866.0), (-6068.0, 909.0), (-6018.0, 909.0)],
    [(-6024.0, 914.0), (-6050.0, 957.0), (-6000.0, 957.0)],
    [(-6004.0, 954.0), (-6030.0, 997.0), (-5980.0, 997.0)],
    [(-5984.0, 996.0), (-6010.0, 1039.0), (-5960.0, 1039.0)],
    [(-8530.0, 698.0), (-8554.0, 741.0), (-8504.0, 741.0)],
    [(-8118.0, 568.0), (-8142.0, 611.0), (-8092.0, 611.0)],
    [(-8406.0, 542.0), (-8430.0, 585.0), (-8380.0, 585.0)],
    [(-8198.0, 574.0), (-8224.0, 617.0), (-8174.0, 617.0)],
    [(-8602.0, 704.0), (-8628.0, 747.0), (-8578.0, 747.0)],
    [(-5048.0, 704.0), (-5074.0, 747.0), (-5024.0, 747.0)],
    [(-5148.0, 803.0), (-5172.0, 846.0), (-5122.0, 846.0)],
    [(-5226.0, 927.0), (-5252.0, 970.0), (-5202.0, 970.0)],
    [(-4946.0, 773.0), (-4972.0, 816.0), (-4922.0, 816.0)],
    [(-4790.0, 377.0), (-4816.0, 420.0), (-4766.0, 420.0)],
    [(-4850.0, 323.0), (-4876.0, 366.0), (-4826.0, 366.0)],
    [(-4916.0, 266.0), (-4940.0, 309.0), (-4890.0, 309.0)],
    [(-4974.0, 222.0), (-5000.0, 265.0), (-4950.0, 265.0)],
    [(-9308.0, 962.0), (-9334.0, 1005.0), (-9284.0, 1005.0)],
    [(-9260.0, 917.0), (-9286.0, 960.0), (-9236.0, 960.0)],
    [(-9208.0, 866.0), (-9234.0, 909.0), (-9184.0, 909.0)],
    [(-9164.0, 809.0), (-9190.0, 852.0), (-9140.0, 852.0)],
    [(-9116.0, 753.0), (-9142.0, 796.0), (-9092.0, 796.0)],
    [(-9052.0, 722.0), (-9076.0, 765.0), (-9026.0, 765.0)],
    [(-8996.0, 762.0), (-9020.0, 805.0), (-8970.0, 805.0)],
    [(-8946.0, 819.0), (-8972.0, 862.0), (-8922.0, 862.0)],
    [(-8918.0, 894.0), (-8942.0, 937.0), (-8892.0, 937.0)],
    [(-8876.0, 967.0), (-8902.0, 1010.0), (-8852.0, 1010.0)],
    [(7236.0, 401.0), (7210.0, 444.0), (7260.0, 444.0)],
    [(7368.0, 396.0), (7342.0, 439.0), (7392.0, 439.0)],
    [(7140.0, 256.0), (7116.0, 299.0), (7166.0, 299.0)],
    [(7454.0, 249.0), (7428.0, 292.0), (7478.0, 292.0)],
    [(7302.0, 402.0), (7278.0, 445.0), (7328.0, 445.0)],
    [(8018.0, 914.0), (7994.0, 957.0), (8044.0, 957.0)],
    [(8068.0, 884.0), (8042.0, 927.0), (8092.0, 927.0)],
    [(8102.0, 835.0), (8076.0, 878.0), (8126.0, 878.0)],
    [(8154.0, 811.0), (8130.0, 854.0), (8180.0, 854.0)],
    [(8194.0, 792.0), (8170.0, 835.0), (8220.0, 835.0)],
    [(8238.0, 764.0), (8214.0, 807.0), (8264.0, 807.0)],
    [(8314.0, 739.0), (8288.0, 782.0), (8338.0, 782.0)],
    [(8364.0, 727.0), (8338.0, 770.0), (8388.0, 770.0)],
    [(8420.0, 691.0), (8396.0, 734.0), (8446.0, 734.0)],
    [(8484.0, 720.0), (8458.0, 763.0), (8508.0, 763.0)],
    [(8504.0, 765.0), (8480.0, 808.0), (8530.0, 808.0)],
    [(8536.0, 797.0), (8512.0, 840.0), (8562.0, 840.0)],
    [(8570.0, 841.0), (8546.0, 884.0), (8596.0, 884.0)],
    [(8596.0, 885.0), (8570.0, 928.0), (8620.0, 928.0)],
    [(8618.0, 924.0), (8594.0, 967.0), (8644.0, 967.0)],
    [(8030.0, 313.0), (8006.0, 356.0), (8056.0, 356.0)],
    [(8078.0, 354.0), (8052.0, 397.0), (8102.0, 397.0)],
    [(8130.0, 394.0), (8106.0, 437.0), (8156.0, 437.0)],
    [(8194.0, 433.0), (8168.0, 476.0), (8218.0, 476.0)],
    [(8258.0, 466.0), (8234.0, 509.0), (8284.0, 509.0)],
    [(8334.0, 493.0), (8310.0, 536.0), (8360.0, 536.0)],
    [(8390.0, 486.0), (8366.0, 529.0), (8416.0, 529.0)],
    [(8426.0, 469.0), (8400.0, 512.0), (8450.0, 512.0)],
    [(8466.0, 432.0), (8442.0, 475.0), (8492.0, 475.0)],
    [(8484.0, 419.0), (8458.0, 462.0), (8508.0, 462.0)],
    [(8496.0, 409.0), (8472.0, 452.0), (8522.0, 452.0)],
    [(8518.0, 391.0), (8492.0, 434.0), (8542.0, 434.0)],
    [(8562.0, 342.0), (8536.0, 385.0), (8586.0, 385.0)],
    [(8604.0, 319.0), (8580.0, 362.0), (8630.0, 362.0)],
    [(8664.0, 348.0), (8640.0, 391.0), (8690.0, 391.0)],
    [(8702.0, 411.0), (8676.0, 454.0), (8726.0, 454.0)],
    [(8712.0, 436.0), (8688.0, 479.0), (8738.0, 479.0)],
    [(8750.0, 477.0), (8726.0, 520.0), (8776.0, 520.0)],
    [(8788.0, 524.0), (8764.0, 567.0), (8814.0, 567.0)],
    [(8834.0, 568.0), (8808.0, 611.0), (8858.0, 611.0)],
    [(8886.0, 602.0), (8862.0, 645.0), (8912.0, 645.0)],
    [(8968.0, 595.0), (8944.0, 638.0), (8994.0, 638.0)],
    [(9018.0, 570.0), (8994.0, 613.0), (9044.0, 613.0)],
    [(9044.0, 549.0), (9020.0, 592.0), (9070.0, 592.0)],
    [(9104.0, 473.0), (9080.0, 516.0), (9130.0, 516.0)],
    [(9120.0, 446.0), (9096.0, 489.0), (9146.0, 489.0)],
    [(9166.0, 387.0), (9140.0, 430.0), (9190.0, 430.0)],
    [(9186.0, 356.0), (9160.0, 399.0), (9210.0, 399.0)],
    [(9194.0, 327.0), (9168.0, 370.0), (9218.0, 370.0)],
    [(8684.0, 932.0), (8660.0, 975.0), (8710.0, 975.0)],
    [(8760.0, 933.0), (8736.0, 976.0), (8786.0, 976.0)],
    [(8836.0, 931.0), (8812.0, 974.0), (8862.0, 974.0)],
    [(8948.0, 929.0), (8922.0, 972.0), (8972.0, 972.0)],
    [(9008.0, 927.0), (8984.0, 970.0), (9034.0, 970.0)],
    [(9070.0, 931.0), (9044.0, 974.0), (9094.0, 974.0)],
    [(9120.0, 929.0), (9096.0, 972.0), (9146.0, 972.0)],
    [(9176.0, 924.0), (9150.0, 967.0), (9200.0, 967.0)],
    [(8896.0, 927.0), (8870.0, 970.0), (8920.0, 970.0)],
];

const CHECKPOINTS: [(f32, f32); 13] = [
    (-2420.0, 672.0),
    (-2318.0, 964.0),
    (-1494.0, 979.0),
    (1631.0, 40.0),
    (4179.0, 249.0),
    (5968.0, 249.0),
    (6570.0, 249.0),
    (-376.0, 456.0),
    (-3000.0, 979.0),
    (-4050.0, 979.0),
    (-4840.0, 979.0),
    (-7360.0, 315.0),
    (7928.0, 972.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_shape() {
        let level = Level::course();
        assert_eq!(level.platforms.len(), 36);
        assert_eq!(level.safe_movers.len(), 5);
        assert_eq!(level.hazard_movers.len(), 14);
        assert_eq!(level.spikes.len(), 224);
        assert_eq!(level.checkpoints.len(), 13);
        assert!(level.spikes.iter().all(|s| s.len() == 3));
    }

    #[test]
    fn test_course_movers_are_valid() {
        let level = Level::course();
        for spec in level.safe_movers.iter().chain(&level.hazard_movers) {
            assert!(spec.build().is_ok(), "{:?}", spec);
        }
    }

    #[test]
    fn test_minimal_json_level() {
        let json = r#"{
            "spawn": [0.0, 0.0],
            "platforms": [{ "x": 0.0, "y": 100.0, "w": 200.0, "h": 20.0 }],
            "safe_movers": [{
                "rect": { "x": 300.0, "y": 100.0, "w": 50.0, "h": 20.0 },
                "axis": "x", "min": 300.0, "max": 500.0, "speed": 60.0
            }],
            "spikes": [[[10.0, 80.0], [0.0, 100.0], [20.0, 100.0]]],
            "finish": { "x": 900.0, "y": 0.0, "w": 20.0, "h": 200.0 }
        }"#;
        let level = Level::from_json(json).unwrap();
        assert_eq!(level.platforms.len(), 1);
        assert_eq!(level.safe_movers[0].axis, Axis::X);
        assert_eq!(level.spikes[0][0], Vec2::new(10.0, 80.0));
        assert_eq!(level.bounds, Bounds::default());
        assert!(level.checkpoints.is_empty());
    }
}
