use valkyrie_fdm::vessel::caps::EffectSource;
use valkyrie_fdm::vessel::config::presets;
use valkyrie_fdm::vessel::{ANIM_BAY_DOOR, ANIM_GEAR, ANIM_NOSE_CONE};
use valkyrie_fdm::{AnimHandle, Host, Key, TouchdownPoint, Valkyrie, VesselModule};

// ---------------------------------------------------------------------------
// Console host stand-in: scripted flight profile, recorded outputs
// ---------------------------------------------------------------------------

struct ConsoleHost {
    mach: f64,
    altitude: f64,
    animation: [f64; 3],
    contact_points: usize,
    contact_swaps: Vec<usize>,
}

impl ConsoleHost {
    fn new() -> Self {
        Self {
            mach: 0.0,
            altitude: 0.0,
            animation: [0.0; 3],
            contact_points: 0,
            contact_swaps: Vec::new(),
        }
    }
}

impl Host for ConsoleHost {
    fn mach_number(&self) -> f64 {
        self.mach
    }

    fn altitude(&self) -> f64 {
        self.altitude
    }

    fn set_animation(&mut self, anim: AnimHandle, value: f64) {
        self.animation[anim.0 as usize] = value;
    }

    fn set_touchdown_points(&mut self, points: &[TouchdownPoint]) {
        self.contact_points = points.len();
        self.contact_swaps.push(points.len());
    }
}

fn main() {
    let mut vessel = Valkyrie::new(presets::valkyrie());
    let mut host = ConsoleHost::new();

    let caps = vessel.class_caps();

    // -----------------------------------------------------------------------
    // Vessel summary
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  VALKYRIE FLIGHT-DYNAMICS MODULE — scripted host run");
    println!("====================================================================");
    println!();
    println!("  Vessel Capabilities");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Empty mass:    {:>9.0} kg    Fuel:        {:>9.0} kg",
        caps.empty_mass, caps.fuel_mass
    );
    println!(
        "  Engines:       {:>9}       Thrust (AB): {:>9.0} N each",
        caps.thrusters.len(),
        vessel.config().afterburner_thrust
    );
    println!(
        "  Thrust (mil):  {:>9.0} N     Isp:         {:>9.0} m/s",
        vessel.config().main_thrust,
        vessel.config().isp
    );
    println!(
        "  Airfoils:      {:>9}       Ctrl sfcs:   {:>9}",
        caps.airfoils.len(),
        caps.control_surfaces.len()
    );
    println!(
        "  Wing area:     {:>9.1} m²    Aspect:      {:>9.3}",
        caps.airfoils[0].area, caps.airfoils[0].aspect_ratio
    );
    println!(
        "  Animations:    {:>9}       Contacts:    {:>9} (initial)",
        caps.animations.len(),
        caps.touchdown_points.len()
    );
    println!();

    // -----------------------------------------------------------------------
    // Restore on-runway state: gear down and settled
    // -----------------------------------------------------------------------
    vessel.parse_scenario_line(&mut host, "GEAR 1 1.0000");

    // -----------------------------------------------------------------------
    // Scripted acceleration to Mach 2.4: gear up after liftoff, a bay
    // door cycle reversed mid-travel, nose cone drooped supersonic
    // -----------------------------------------------------------------------
    let dt = 0.5;
    let keys: &[(f64, Key, &str)] = &[
        (2.0, Key::G, "gear up"),
        (3.0, Key::K, "bay door open"),
        (6.5, Key::K, "bay door reversed mid-travel"),
        (10.0, Key::C, "nose cone down"),
    ];

    println!("  Timeline");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>6}  {:>5}  {:>7}  {:>15}  {:>15}  {:>15}  {:>4}  {:>5}",
        "t (s)", "Mach", "alt (m)", "gear", "bay door", "nose cone", "boom", "trail"
    );
    println!("  {}", "─".repeat(84));

    let mut swaps_seen = host.contact_swaps.len();
    let mut t = 0.0;
    while t <= 40.0 {
        for (when, key, label) in keys {
            if (t - when).abs() < dt / 2.0 {
                vessel.consume_buffered_key(*key, true);
                println!("  t={:>5.1}s  KEY {:?} — {}", t, key, label);
            }
        }

        host.mach = t / 16.0;
        host.altitude = 450.0 * t;
        vessel.post_step(&mut host, t, dt);

        if host.contact_swaps.len() > swaps_seen {
            swaps_seen = host.contact_swaps.len();
            println!(
                "  t={:>5.1}s  CONTACT SET swapped to {} points",
                t,
                host.contact_points
            );
        }

        // Sampled rows
        if (t / dt) as u64 % 4 == 0 {
            println!(
                "  {:>6.1}  {:>5.2}  {:>7.0}  {:>10} {:>4.2}  {:>10} {:>4.2}  {:>10} {:>4.2}  {:>4.1}  {:>5.1}",
                t,
                host.mach,
                host.altitude,
                vessel.gear().status().label(),
                vessel.gear().progress(),
                vessel.bay_door().status().label(),
                vessel.bay_door().progress(),
                vessel.nose_cone().status().label(),
                vessel.nose_cone().progress(),
                vessel.particle_level(EffectSource::SonicBoom),
                vessel.particle_level(EffectSource::Contrail),
            );
        }

        t += dt;
    }

    // -----------------------------------------------------------------------
    // Scenario dump
    // -----------------------------------------------------------------------
    println!();
    println!("  Saved scenario state");
    println!("  ──────────────────────────────────────────────────────────────────");
    let mut scn = Vec::new();
    vessel.save_state(&mut scn).unwrap();
    for line in String::from_utf8(scn).unwrap().lines() {
        println!("  {}", line);
    }
    println!();
    println!(
        "  Animation values: gear {:.2}, door {:.2}, nose {:.2}",
        host.animation[ANIM_GEAR.0 as usize],
        host.animation[ANIM_BAY_DOOR.0 as usize],
        host.animation[ANIM_NOSE_CONE.0 as usize]
    );
    println!("====================================================================");
    println!();
}
