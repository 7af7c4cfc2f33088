//! Caller hook applied to every entity right after it is built.

use crate::core::Id;
use crate::home::{
    BackgroundImage, Baseboard, Camera, Compass, DimensionLine, Environment, HomeMaterial,
    HomePiece, HomePrint, HomeTexture, Label, Level, Polyline, Room, TextStyle, Transformation,
    Wall,
};
use crate::xml::errors::HomeXmlError;
use crate::xml::quick::de::Attributes;

/// Any entity a builder produces.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeEntity {
    Level(Level),
    Piece(HomePiece),
    Wall(Wall),
    Room(Room),
    Polyline(Polyline),
    DimensionLine(DimensionLine),
    Label(Label),
    Camera(Camera),
    Environment(Environment),
    Print(HomePrint),
    Compass(Compass),
    BackgroundImage(BackgroundImage),
    Texture(HomeTexture),
    Material(HomeMaterial),
    Transformation(Transformation),
    Baseboard(Baseboard),
    TextStyle(TextStyle),
}

impl HomeEntity {
    /// The document id of entities that carry one.
    pub fn id(&self) -> Option<&Id> {
        match self {
            HomeEntity::Level(level) => Some(&level.id),
            HomeEntity::Piece(piece) => Some(&piece.id),
            HomeEntity::Wall(wall) => Some(&wall.id),
            HomeEntity::Room(room) => Some(&room.id),
            HomeEntity::Polyline(polyline) => Some(&polyline.id),
            HomeEntity::DimensionLine(line) => Some(&line.id),
            HomeEntity::Label(label) => Some(&label.id),
            HomeEntity::Camera(camera) => Some(&camera.id),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            HomeEntity::Level(_) => "level",
            HomeEntity::Piece(_) => "piece",
            HomeEntity::Wall(_) => "wall",
            HomeEntity::Room(_) => "room",
            HomeEntity::Polyline(_) => "polyline",
            HomeEntity::DimensionLine(_) => "dimension line",
            HomeEntity::Label(_) => "label",
            HomeEntity::Camera(_) => "camera",
            HomeEntity::Environment(_) => "environment",
            HomeEntity::Print(_) => "print",
            HomeEntity::Compass(_) => "compass",
            HomeEntity::BackgroundImage(_) => "background image",
            HomeEntity::Texture(_) => "texture",
            HomeEntity::Material(_) => "material",
            HomeEntity::Transformation(_) => "transformation",
            HomeEntity::Baseboard(_) => "baseboard",
            HomeEntity::TextStyle(_) => "text style",
        }
    }
}

/// What the hook decided for an entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Substitution {
    Keep(HomeEntity),
    /// A specialized entity to attach instead. It must keep the kind and id
    /// of the one it replaces.
    Replace(HomeEntity),
}

/// Extension point letting callers specialize entities as they are built.
///
/// Closures taking `(HomeEntity, &str, &Attributes)` implement this trait.
pub trait EntityHook {
    fn substitute(&self, entity: HomeEntity, element: &str, attributes: &Attributes)
    -> Substitution;
}

impl<F> EntityHook for F
where
    F: Fn(HomeEntity, &str, &Attributes) -> Substitution,
{
    fn substitute(
        &self,
        entity: HomeEntity,
        element: &str,
        attributes: &Attributes,
    ) -> Substitution {
        self(entity, element, attributes)
    }
}

/// Conversion between a built entity and its [`HomeEntity`] form.
pub trait Substitutable: Sized {
    fn into_entity(self) -> HomeEntity;
    fn from_entity(entity: HomeEntity) -> Option<Self>;
}

macro_rules! substitutable {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl Substitutable for $ty {
                fn into_entity(self) -> HomeEntity {
                    HomeEntity::$variant(self)
                }

                fn from_entity(entity: HomeEntity) -> Option<Self> {
                    match entity {
                        HomeEntity::$variant(value) => Some(value),
                        _ => None,
                    }
                }
            }
        )+
    };
}

substitutable! {
    Level => Level,
    HomePiece => Piece,
    Wall => Wall,
    Room => Room,
    Polyline => Polyline,
    DimensionLine => DimensionLine,
    Label => Label,
    Camera => Camera,
    Environment => Environment,
    HomePrint => Print,
    Compass => Compass,
    BackgroundImage => BackgroundImage,
    HomeTexture => Texture,
    HomeMaterial => Material,
    Transformation => Transformation,
    Baseboard => Baseboard,
    TextStyle => TextStyle,
}

/// Pass `built` through the hook.
///
/// Returns the entity to attach and whether the hook replaced it.
pub fn substitute<T: Substitutable>(
    hook: Option<&dyn EntityHook>,
    built: T,
    attributes: &Attributes,
) -> Result<(T, bool), HomeXmlError> {
    let Some(hook) = hook else {
        return Ok((built, false));
    };
    let entity = built.into_entity();
    let kind = entity.kind_name();
    let id = entity.id().cloned();
    let element = attributes.element_name();

    let (entity, replaced) = match hook.substitute(entity, element, attributes) {
        Substitution::Keep(entity) => (entity, false),
        Substitution::Replace(entity) => (entity, true),
    };

    if entity.id() != id.as_ref() {
        return Err(HomeXmlError::Substitution {
            element: element.to_string(),
            message: format!(
                "{} id changed from {:?} to {:?}",
                kind,
                id.as_ref().map(Id::as_str),
                entity.id().map(Id::as_str)
            ),
        });
    }
    let found = entity.kind_name();
    match T::from_entity(entity) {
        Some(value) => Ok((value, replaced)),
        None => Err(HomeXmlError::Substitution {
            element: element.to_string(),
            message: format!("expected a {}, got a {}", kind, found),
        }),
    }
}
