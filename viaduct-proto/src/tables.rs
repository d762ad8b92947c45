//! Static argument-type tables.
//!
//! Two nested payload carriers (`AbilityInvokeEntry.ability_data` and
//! `CombatInvokeEntry.combat_data`) hold the binary body of another
//! message, selected by a small enum next to it. These enum→name tables
//! are fixed by the client engine and identical across protocol versions.

/// Message name carried for a given `AbilityInvokeArgumentType` value.
pub fn ability_argument_message(argument_type: u32) -> Option<&'static str> {
    Some(match argument_type {
        1 => "AbilityMetaModifierChange",
        3 => "AbilityMetaSpecialFloatArgument",
        4 => "AbilityScalarValueEntry",
        5 => "AbilityString",
        6 => "AbilityMetaReInitOverrideMap",
        7 => "AbilityScalarValueEntry",
        8 => "AbilityString",
        10 => "AbilityMetaAddOrGetAbilityAndTrigger",
        11 => "AbilityMetaSetKilledState",
        12 => "AbilityMetaSetAbilityTrigger",
        13 => "AbilityMetaAddAbility",
        15 => "AbilityMetaSetModifierApplyEntityId",
        16 => "AbilityMetaModifierDurabilityChange",
        17 => "AbilityMetaElementReactionVisual",
        18 => "AbilityMetaSetPoseParameter",
        19 => "AbilityMetaUpdateBaseReactionDamage",
        20 => "AbilityMetaTriggerElementReaction",
        21 => "AbilityMetaLoseHp",
        22 => "AbilityMetaDurabilityIsZero",
        50 => "AbilityActionTriggerAbility",
        51 => "AbilityActionSetCrashDamage",
        53 => "AbilityActionSummon",
        54 => "AbilityActionBlink",
        55 => "AbilityActionCreateGadget",
        56 => "AbilityApplyLevelModifier",
        57 => "AbilityActionGenerateElemBall",
        58 => "AbilityActionSetRandomOverrideMapValue",
        59 => "AbilityActionServerMonsterLog",
        60 => "AbilityActionCreateTile",
        61 => "AbilityActionDestroyTile",
        62 => "AbilityActionFireAfterImage",
        63 => "AbilityActionDeductStamina",
        64 => "AbilityActionHitEffect",
        65 => "AbilityActionSetBulletTrackTarget",
        100 => "AbilityMixinAvatarSteerByCamera",
        102 => "AbilityMixinWindZone",
        103 => "AbilityMixinCostStamina",
        104 => "AbilityMixinEliteShield",
        105 => "AbilityMixinElementShield",
        106 => "AbilityMixinGlobalShield",
        107 => "AbilityMixinShieldBar",
        108 => "AbilityMixinWindSeedSpawner",
        109 => "AbilityMixinDoActionByElementReaction",
        110 => "AbilityMixinFieldEntityCountChange",
        111 => "AbilityMixinScenePropSync",
        112 => "AbilityMixinWidgetMpSupport",
        _ => return None,
    })
}

/// Message name carried for a given `CombatArgumentType` value.
pub fn combat_argument_message(argument_type: u32) -> Option<&'static str> {
    Some(match argument_type {
        1 => "EvtBeingHitInfo",
        2 => "EvtAnimatorStateChangedInfo",
        3 => "EvtFaceToDirInfo",
        4 => "EvtSetAttackTargetInfo",
        5 => "EvtRushMoveInfo",
        6 => "EvtAnimatorParameterInfo",
        7 => "EntityMoveInfo",
        8 => "EvtSyncEntityPositionInfo",
        9 => "EvtCombatSteerMotionInfo",
        10 => "EvtCombatForceSetPosInfo",
        11 => "EvtCompensatePosDiffInfo",
        12 => "EvtMonsterDoBlink",
        13 => "EvtFixedRushMove",
        14 => "EvtSyncTransform",
        15 => "EvtLightCoreMove",
        16 => "EvtBeingHealedNotify",
        17 => "EvtSkillAnchorPositionNotify",
        18 => "EvtGrapplingHookMove",
        19 => "EvtSpecialMotionInfo",
        _ => return None,
    })
}

/// Every message name either table can select, for eager schema loading.
pub(crate) fn argument_message_names() -> impl Iterator<Item = &'static str> {
    const ABILITY_TYPES: std::ops::RangeInclusive<u32> = 0..=120;
    const COMBAT_TYPES: std::ops::RangeInclusive<u32> = 0..=20;
    ABILITY_TYPES
        .filter_map(ability_argument_message)
        .chain(COMBAT_TYPES.filter_map(combat_argument_message))
}
