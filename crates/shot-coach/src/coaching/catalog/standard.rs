use super::CatalogDocument;
use crate::coaching::domain::{
    CauseEffect, Comparison, DetectionRule, Flaw, FlawCombination, FlawId, RuleCondition,
    ScoreRange, Severity, ShooterLevel,
};

pub(super) fn document() -> CatalogDocument {
    CatalogDocument {
        flaws: standard_flaws(),
        combinations: standard_combinations(),
        levels: standard_levels(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn ids(items: &[&str]) -> Vec<FlawId> {
    items.iter().map(|&item| FlawId::from(item)).collect()
}

fn link(effect: &str, explanation: &str, severity: Severity) -> CauseEffect {
    CauseEffect {
        effect: effect.to_string(),
        explanation: explanation.to_string(),
        severity,
    }
}

fn standard_flaws() -> Vec<Flaw> {
    vec![
        Flaw {
            id: FlawId::from("ELBOW_ANGLE_ACUTE"),
            name: "Elbow Angle Too Acute".to_string(),
            category: "elbow".to_string(),
            description: "The shooting elbow folds well past 90 degrees at the set point, cramping the arm before extension.".to_string(),
            detection_rule: DetectionRule::numeric("elbow_angle", Comparison::LessThan, 70.0),
            cause_chain: vec![
                link("Shortened pushing lever", "A tightly folded arm has less range to extend through, so the ball leaves with less upward drive.", Severity::Moderate),
                link("Compensating wrist flick", "To recover distance the wrist snaps harder, which adds variability to release speed.", Severity::Moderate),
                link("Short misses from range", "Fatigue exposes the missing arm extension and shots fall short on the front rim.", Severity::Major),
            ],
            symptoms: strings(&["Ball sits close to the forehead at the set point", "Front-rim misses late in sessions", "Shot feels pushed rather than lifted"]),
            fixes: strings(&["Open the elbow to roughly 90 degrees at the set point", "Start the ball slightly further from the face", "Extend fully upward before the wrist snaps"]),
            drills: strings(&["One-hand form shooting", "Wall set-point holds", "Chair shooting"]),
            priority: 8,
            related_flaws: ids(&["FLAT_ARC", "LOW_RELEASE_POINT"]),
        },
        Flaw {
            id: FlawId::from("ELBOW_ANGLE_WIDE"),
            name: "Elbow Angle Too Open".to_string(),
            category: "elbow".to_string(),
            description: "The elbow stays too straight at the set point, leaving little arm extension to power the shot.".to_string(),
            detection_rule: DetectionRule::numeric("elbow_angle", Comparison::GreaterThan, 110.0),
            cause_chain: vec![
                link("Early arm extension", "With the arm already extended the release relies on the shoulder rather than the elbow.", Severity::Moderate),
                link("Flat trajectory", "Shoulder-driven shots travel forward instead of up.", Severity::Moderate),
            ],
            symptoms: strings(&["Ball carried high and away from the head", "Shot looks like a push from the shoulder"]),
            fixes: strings(&["Bring the ball back over the shooting eye", "Load the elbow under the ball before lifting"]),
            drills: strings(&["Wall set-point holds", "One-hand form shooting"]),
            priority: 6,
            related_flaws: ids(&["FLAT_ARC"]),
        },
        Flaw {
            id: FlawId::from("ELBOW_FLARE"),
            name: "Elbow Flare".to_string(),
            category: "alignment".to_string(),
            description: "The shooting elbow drifts outside the line between the shooting foot and the rim.".to_string(),
            detection_rule: DetectionRule::numeric("elbow_flare_angle", Comparison::GreaterThan, 15.0),
            cause_chain: vec![
                link("Off-line force vector", "The forearm no longer points at the rim, so extension pushes the ball sideways.", Severity::Major),
                link("Side-to-side misses", "Small changes in flare size change the lateral error shot to shot.", Severity::Major),
                link("Inconsistent rotation", "Fingers come off the ball at an angle and add side spin.", Severity::Moderate),
            ],
            symptoms: strings(&["Misses left and right of the rim", "Elbow visible outside the body line from the front", "Ball spins sideways"]),
            fixes: strings(&["Align the elbow under the ball and over the shooting foot", "Turn the feet slightly so the shooting side lines up with the rim", "Keep the forearm vertical through the lift"]),
            drills: strings(&["One-hand form shooting", "Line shooting along the floor seam", "Mirror alignment checks"]),
            priority: 9,
            related_flaws: ids(&["GUIDE_HAND_PUSH", "SIDE_SPIN"]),
        },
        Flaw {
            id: FlawId::from("GUIDE_HAND_PUSH"),
            name: "Guide Hand Interference".to_string(),
            category: "guide_hand".to_string(),
            description: "The guide hand adds force to the ball during release instead of only steadying it.".to_string(),
            detection_rule: DetectionRule::qualitative("guide_hand_motion", RuleCondition::ForwardMotion, "during_release"),
            cause_chain: vec![
                link("Second force source", "Two hands pushing at once make the release direction depend on their balance.", Severity::Major),
                link("Lateral drift", "The guide hand pushes the ball across the body toward the shooting side's opposite.", Severity::Major),
            ],
            symptoms: strings(&["Guide thumb flicks at release", "Misses consistently to one side", "Ball wobbles in flight"]),
            fixes: strings(&["Keep the guide hand on the side of the ball", "Let the guide hand stay still and release first", "Hold the guide hand up after release"]),
            drills: strings(&["One-hand form shooting", "Guide hand off drill", "Off-hand freeze finish"]),
            priority: 9,
            related_flaws: ids(&["THUMB_FLICK", "ELBOW_FLARE"]),
        },
        Flaw {
            id: FlawId::from("THUMB_FLICK"),
            name: "Guide Thumb Flick".to_string(),
            category: "guide_hand".to_string(),
            description: "The guide-hand thumb flicks toward the rim as the ball leaves.".to_string(),
            detection_rule: DetectionRule::qualitative("guide_thumb", RuleCondition::Movement, "after_release"),
            cause_chain: vec![
                link("Added side spin", "The thumb imparts rotation across the ball's axis.", Severity::Minor),
                link("Soft-touch loss", "Side spin makes rim contacts bounce away instead of dropping.", Severity::Moderate),
            ],
            symptoms: strings(&["Thumb points at the rim after release", "Unlucky rim-outs"]),
            fixes: strings(&["Point the guide thumb at the ceiling after release", "Relax the guide hand fingers"]),
            drills: strings(&["Guide hand off drill", "Off-hand freeze finish"]),
            priority: 5,
            related_flaws: ids(&["GUIDE_HAND_PUSH", "SIDE_SPIN"]),
        },
        Flaw {
            id: FlawId::from("FLAT_ARC"),
            name: "Flat Shot Arc".to_string(),
            category: "trajectory".to_string(),
            description: "The ball leaves the hand at too shallow an angle to enter the rim cleanly.".to_string(),
            detection_rule: DetectionRule::numeric("release_angle", Comparison::LessThan, 42.0),
            cause_chain: vec![
                link("Smaller target window", "A flat entry angle shrinks the effective size of the rim.", Severity::Major),
                link("Hard rim contact", "Flat shots hit the back of the rim with more horizontal speed.", Severity::Moderate),
            ],
            symptoms: strings(&["Line-drive trajectory", "Back-rim misses", "Few shots drop after hitting the rim"]),
            fixes: strings(&["Release up through the top of the net, not at the front rim", "Extend the arm upward before the snap", "Aim for an entry that peaks above the backboard square"]),
            drills: strings(&["Arc target shooting", "Chair shooting", "Close-range high-arc makes"]),
            priority: 8,
            related_flaws: ids(&["ELBOW_ANGLE_ACUTE", "INSUFFICIENT_KNEE_BEND"]),
        },
        Flaw {
            id: FlawId::from("LOW_RELEASE_POINT"),
            name: "Low Release Point".to_string(),
            category: "release".to_string(),
            description: "The ball is released below the forehead, making the shot easy to contest and flattening the arc.".to_string(),
            detection_rule: DetectionRule::qualitative("release_point", RuleCondition::Under, "forehead"),
            cause_chain: vec![
                link("Shortened flight path", "A low release gives the ball less height to build arc.", Severity::Moderate),
                link("Contestable shot", "Defenders reach a low release point easily.", Severity::Minor),
            ],
            symptoms: strings(&["Ball released in front of the face", "Shots get blocked"]),
            fixes: strings(&["Lift the set point above the forehead", "Finish with the arm fully extended"]),
            drills: strings(&["Wall set-point holds", "Close-range high-arc makes"]),
            priority: 7,
            related_flaws: ids(&["FLAT_ARC"]),
        },
        Flaw {
            id: FlawId::from("BALL_BELOW_SHOULDER"),
            name: "Set Point Below Shoulder".to_string(),
            category: "release".to_string(),
            description: "The ball dips below shoulder level before the upward motion starts.".to_string(),
            detection_rule: DetectionRule::qualitative("set_point_height", RuleCondition::Under, "shoulder_level"),
            cause_chain: vec![
                link("Long shot path", "A deep dip adds travel distance and slows the release.", Severity::Minor),
                link("Timing variance", "Longer motions are harder to repeat at game speed.", Severity::Moderate),
            ],
            symptoms: strings(&["Slow release", "Shots contested on the catch"]),
            fixes: strings(&["Catch the ball in the shot pocket at chest height", "Move straight up from the pocket"]),
            drills: strings(&["Catch-and-shoot pocket reps", "Quick-release spot shooting"]),
            priority: 6,
            related_flaws: ids(&["LATE_RELEASE"]),
        },
        Flaw {
            id: FlawId::from("INSUFFICIENT_KNEE_BEND"),
            name: "Insufficient Knee Bend".to_string(),
            category: "lower_body".to_string(),
            description: "The legs barely load, so the arms supply most of the shot's power.".to_string(),
            detection_rule: DetectionRule::numeric("knee_angle", Comparison::GreaterThan, 150.0),
            cause_chain: vec![
                link("Arm-dominant shot", "Without leg drive the upper body generates the distance.", Severity::Moderate),
                link("Range collapse", "Deep shots require an abrupt push that breaks form.", Severity::Major),
                link("Fatigue sensitivity", "Arm muscles tire quickly, so accuracy drops late in games.", Severity::Moderate),
            ],
            symptoms: strings(&["Shot falls short from deep", "Upper body strains on long shots"]),
            fixes: strings(&["Dip the knees as the ball reaches the pocket", "Let leg extension start the shot", "Sync the arm lift with the rise from the legs"]),
            drills: strings(&["Dip-and-rise shooting", "Step-back range ladder", "Chair shooting"]),
            priority: 7,
            related_flaws: ids(&["FLAT_ARC"]),
        },
        Flaw {
            id: FlawId::from("EXCESSIVE_KNEE_BEND"),
            name: "Excessive Knee Bend".to_string(),
            category: "lower_body".to_string(),
            description: "The shooter sinks too deep, wasting time and energy before the release.".to_string(),
            detection_rule: DetectionRule::numeric("knee_angle", Comparison::LessThan, 100.0),
            cause_chain: vec![
                link("Slow load", "Sinking deep lengthens the motion.", Severity::Minor),
                link("Energy leak", "Deep flexion spends power before it reaches the ball.", Severity::Minor),
            ],
            symptoms: strings(&["Noticeable squat before the jump", "Late release on closeouts"]),
            fixes: strings(&["Bend to a comfortable athletic stance only", "Rise continuously from the dip"]),
            drills: strings(&["Dip-and-rise shooting", "Quick-release spot shooting"]),
            priority: 4,
            related_flaws: Vec::new(),
        },
        Flaw {
            id: FlawId::from("LATE_RELEASE"),
            name: "Late Release".to_string(),
            category: "timing".to_string(),
            description: "The ball leaves the hand after the peak of the jump, on the way down.".to_string(),
            detection_rule: DetectionRule::qualitative("release_timing", RuleCondition::After, "peak_of_jump"),
            cause_chain: vec![
                link("Lost leg energy", "Upward momentum is gone, so the arms must supply everything.", Severity::Moderate),
                link("Drifting trajectory", "Releasing while falling pulls the shot short.", Severity::Moderate),
            ],
            symptoms: strings(&["Hang time before release", "Short misses on jump shots"]),
            fixes: strings(&["Release on the way up or at the top", "Start the arm lift earlier in the jump"]),
            drills: strings(&["Quick-release spot shooting", "Dip-and-rise shooting"]),
            priority: 5,
            related_flaws: ids(&["BALL_BELOW_SHOULDER"]),
        },
        Flaw {
            id: FlawId::from("NO_FOLLOW_THROUGH"),
            name: "Missing Follow-Through".to_string(),
            category: "release".to_string(),
            description: "The shooting hand pulls back instead of holding a relaxed gooseneck finish.".to_string(),
            detection_rule: DetectionRule::qualitative("follow_through", RuleCondition::NoPattern, "gooseneck"),
            cause_chain: vec![
                link("Reduced backspin", "An abrupt stop takes rotation off the ball.", Severity::Minor),
                link("Inconsistent touch", "Without a repeatable finish, release speed varies.", Severity::Moderate),
            ],
            symptoms: strings(&["Hand drops immediately after release", "Flat-spinning ball"]),
            fixes: strings(&["Hold the finish until the ball hits the rim", "Let the fingers point down into the basket"]),
            drills: strings(&["Freeze-finish form shooting", "Off-hand freeze finish"]),
            priority: 6,
            related_flaws: Vec::new(),
        },
        Flaw {
            id: FlawId::from("SIDE_SPIN"),
            name: "Ball Side Spin".to_string(),
            category: "release".to_string(),
            description: "The ball rotates around a tilted axis instead of pure backspin.".to_string(),
            detection_rule: DetectionRule::qualitative("ball_rotation", RuleCondition::Pattern, "side_spin"),
            cause_chain: vec![link("Unpredictable bounces", "Side spin kicks the ball off the rim sideways.", Severity::Minor)],
            symptoms: strings(&["Ball rotation visibly tilted", "Shots spin out of the rim"]),
            fixes: strings(&["Release off the index and middle fingers together", "Keep the wrist straight behind the ball"]),
            drills: strings(&["Lying-down spin shots", "One-hand form shooting"]),
            priority: 4,
            related_flaws: ids(&["ELBOW_FLARE", "THUMB_FLICK"]),
        },
        Flaw {
            id: FlawId::from("FORWARD_DRIFT"),
            name: "Forward Drift".to_string(),
            category: "balance".to_string(),
            description: "The shooter jumps forward toward the rim rather than straight up.".to_string(),
            detection_rule: DetectionRule::qualitative("hip_travel", RuleCondition::ForwardMotion, "any"),
            cause_chain: vec![
                link("Added forward momentum", "Body travel adds distance the arms did not plan for.", Severity::Minor),
                link("Long misses", "Drifting shots carry to the back rim.", Severity::Moderate),
            ],
            symptoms: strings(&["Landing well in front of the take-off spot", "Back-rim misses"]),
            fixes: strings(&["Land on the take-off spot", "Keep the chest tall through the jump"]),
            drills: strings(&["Land-on-the-line shooting", "Dip-and-rise shooting"]),
            priority: 4,
            related_flaws: Vec::new(),
        },
    ]
}

fn standard_combinations() -> Vec<FlawCombination> {
    vec![
        FlawCombination {
            flaw_ids: ids(&["ELBOW_FLARE", "GUIDE_HAND_PUSH"]),
            combined_effect: "Elbow flare and a pushing guide hand both steer the ball sideways, producing severe directional inconsistency: the two errors sometimes cancel and sometimes stack, so misses alternate left and right.".to_string(),
            overall_impact: "Accuracy becomes unpredictable shot to shot, which makes the other flaws impossible to diagnose until alignment is fixed.".to_string(),
            primary_fix: "Rebuild the shot one-handed with the elbow stacked under the ball, then add the guide hand back as a passive support only".to_string(),
        },
        FlawCombination {
            flaw_ids: ids(&["ELBOW_ANGLE_ACUTE", "FLAT_ARC"]),
            combined_effect: "A cramped elbow shortens the upward lever, so the shot is pushed forward and leaves on a flat line.".to_string(),
            overall_impact: "Range is limited and misses cluster on the front and back rim.".to_string(),
            primary_fix: "Open the set point and extend up through the top of the net before adding distance".to_string(),
        },
        FlawCombination {
            flaw_ids: ids(&["INSUFFICIENT_KNEE_BEND", "FLAT_ARC"]),
            combined_effect: "With no leg drive the arms throw the ball at the rim, trading arc for distance.".to_string(),
            overall_impact: "Long shots become line drives and accuracy drops sharply with fatigue.".to_string(),
            primary_fix: "Start every shot from the legs so the arms can focus on lifting the ball".to_string(),
        },
        FlawCombination {
            flaw_ids: ids(&["BALL_BELOW_SHOULDER", "LATE_RELEASE"]),
            combined_effect: "A deep dip delays the lift, so the ball is still rising in the hands when the jump peaks and is released on the way down.".to_string(),
            overall_impact: "The shot is slow and short, and it is easy to contest.".to_string(),
            primary_fix: "Shorten the shot path by catching in the pocket and releasing on the way up".to_string(),
        },
    ]
}

fn standard_levels() -> Vec<ShooterLevel> {
    vec![
        ShooterLevel {
            level: 1,
            name: "LEGENDARY".to_string(),
            score_range: ScoreRange::new(97, 100),
            description: "Mechanics on par with the best shooters in the game.".to_string(),
            characteristics: strings(&["Identical release every repetition", "Effortless range", "No detectable flaws"]),
        },
        ShooterLevel {
            level: 2,
            name: "ELITE".to_string(),
            score_range: ScoreRange::new(93, 96),
            description: "Professional-grade form with only cosmetic deviations.".to_string(),
            characteristics: strings(&["High, consistent arc", "Quick, compact release"]),
        },
        ShooterLevel {
            level: 3,
            name: "PRO".to_string(),
            score_range: ScoreRange::new(88, 92),
            description: "Very strong fundamentals that hold up under pressure.".to_string(),
            characteristics: strings(&["Sound alignment", "Reliable follow-through"]),
        },
        ShooterLevel {
            level: 4,
            name: "ADVANCED".to_string(),
            score_range: ScoreRange::new(80, 87),
            description: "Solid mechanics with one or two correctable habits.".to_string(),
            characteristics: strings(&["Good base and balance", "Minor release inconsistencies"]),
        },
        ShooterLevel {
            level: 5,
            name: "PROFICIENT".to_string(),
            score_range: ScoreRange::new(70, 79),
            description: "Functional shot that breaks down at range or speed.".to_string(),
            characteristics: strings(&["Comfortable mid-range", "Form changes on deep attempts"]),
        },
        ShooterLevel {
            level: 6,
            name: "INTERMEDIATE".to_string(),
            score_range: ScoreRange::new(55, 69),
            description: "Recognizable shooting form with several competing flaws.".to_string(),
            characteristics: strings(&["Inconsistent set point", "Misses in more than one direction"]),
        },
        ShooterLevel {
            level: 7,
            name: "DEVELOPING".to_string(),
            score_range: ScoreRange::new(40, 54),
            description: "Building blocks are present but the motion is not yet repeatable.".to_string(),
            characteristics: strings(&["Arm-dominant shot", "Limited range"]),
        },
        ShooterLevel {
            level: 8,
            name: "BEGINNER".to_string(),
            score_range: ScoreRange::new(0, 39),
            description: "Early stage shooter; focus on fundamentals close to the basket.".to_string(),
            characteristics: strings(&["Two-hand push", "No consistent set point"]),
        },
    ]
}
